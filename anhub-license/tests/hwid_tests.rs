use anhub_license::{Hwid, LicenseError, MIN_HWID_LEN};

// ── Accepting input ──────────────────────────────────────────────

#[test]
fn parse_plain_hwid() {
    let hwid = Hwid::parse("ABCDE12345").unwrap();
    assert_eq!(hwid.as_str(), "ABCDE12345");
}

#[test]
fn parse_trims_whitespace() {
    let hwid = Hwid::parse("\t  ABCDE12345 \n").unwrap();
    assert_eq!(hwid.as_str(), "ABCDE12345");
}

#[test]
fn parse_accepts_minimum_length() {
    assert!(Hwid::parse("12345").is_ok());
}

#[test]
fn parse_counts_utf16_code_units() {
    // Three non-BMP characters occupy six UTF-16 code units.
    assert!(Hwid::parse("𝕏𝕏𝕏").is_ok());
}

// ── Rejecting input ──────────────────────────────────────────────

#[test]
fn parse_rejects_empty() {
    assert_eq!(Hwid::parse(""), Err(LicenseError::EmptyHwid));
}

#[test]
fn parse_rejects_whitespace_only() {
    assert_eq!(Hwid::parse("   \n\t "), Err(LicenseError::EmptyHwid));
}

#[test]
fn parse_rejects_too_short() {
    assert_eq!(
        Hwid::parse("ab"),
        Err(LicenseError::HwidTooShort {
            len: 2,
            min: MIN_HWID_LEN
        })
    );
}

#[test]
fn parse_rejects_one_below_minimum() {
    assert_eq!(
        Hwid::parse("1234"),
        Err(LicenseError::HwidTooShort {
            len: 4,
            min: MIN_HWID_LEN
        })
    );
}

#[test]
fn parse_rejects_short_after_trimming() {
    assert!(matches!(
        Hwid::parse("        abc        "),
        Err(LicenseError::HwidTooShort { len: 3, .. })
    ));
}

// ── Trait impls ──────────────────────────────────────────────────

#[test]
fn display_and_as_ref() {
    let hwid = Hwid::parse("ABCDE12345").unwrap();
    assert_eq!(hwid.to_string(), "ABCDE12345");
    assert_eq!(hwid.as_ref(), "ABCDE12345");
}

#[test]
fn from_str_validates() {
    let ok: Result<Hwid, _> = "ABCDE12345".parse();
    assert!(ok.is_ok());
    let err: Result<Hwid, _> = "ab".parse();
    assert!(err.is_err());
}

#[test]
fn serde_is_transparent() {
    let hwid = Hwid::parse("ABCDE12345").unwrap();
    let json = serde_json::to_string(&hwid).unwrap();
    assert_eq!(json, "\"ABCDE12345\"");
    let restored: Hwid = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, hwid);
}

// ── Error display ────────────────────────────────────────────────

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        LicenseError::EmptyHwid.to_string(),
        "please enter your HWID first"
    );
    let err = LicenseError::HwidTooShort { len: 2, min: 5 };
    assert!(err.to_string().contains("too short"));
    assert!(err.to_string().contains('2'));
}

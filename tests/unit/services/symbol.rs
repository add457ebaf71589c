//! Unit tests for symbol resolution

use xiaofeilun::services::symbol::resolve;

#[test]
fn test_shanghai_codes_get_ss_suffix() {
    assert_eq!(resolve("600519"), "600519.SS");
    for code in ["601318", "603288", "605499"] {
        assert_eq!(resolve(code), format!("{}.SS", code));
    }
}

#[test]
fn test_shenzhen_codes_get_sz_suffix() {
    assert_eq!(resolve("000001"), "000001.SZ");
    for code in ["001979", "002594", "300750", "301269"] {
        assert_eq!(resolve(code), format!("{}.SZ", code));
    }
}

#[test]
fn test_unmapped_prefix_passes_through() {
    assert_eq!(resolve("999999"), "999999");
    assert_eq!(resolve("AAPL"), "AAPL");
    assert_eq!(resolve("6005191"), "6005191");
}

#[test]
fn test_existing_suffix_is_uppercased() {
    assert_eq!(resolve("600519.ss"), "600519.SS");
    assert_eq!(resolve("000001.sz"), "000001.SZ");
    assert_eq!(resolve("600519.SS"), "600519.SS");
    assert_eq!(resolve("999999.sz"), "999999.SZ");
}

#[test]
fn test_whitespace_is_removed() {
    assert_eq!(resolve("  600519 "), "600519.SS");
    assert_eq!(resolve("300 750"), "300750.SZ");
}

#[test]
fn test_resolve_is_idempotent() {
    for input in ["600519", "000001.sz", "999999", " 300 750 ", "AAPL", "", "600519.Ss"] {
        let once = resolve(input);
        assert_eq!(resolve(&once), once, "input {:?}", input);
    }
}

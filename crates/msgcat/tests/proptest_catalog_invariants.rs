//! Property-based invariant tests for the catalog façade.
//!
//! Verifies the fallback laws over arbitrary inputs:
//!
//! 1. Unknown msgids always come back verbatim from gettext
//! 2. Unknown contexts always come back verbatim from pgettext
//! 3. Plural fallback obeys the `n == 1` rule for unknown msgids
//! 4. try/silent variants agree: a silent hit is never a try miss
//! 5. Loading the same bytes twice yields equal catalogs

use msgcat::MessageCatalog;
use proptest::prelude::*;

const TEST_PO: &str = include_str!("../testdata/test.po");

fn fixture() -> MessageCatalog {
    MessageCatalog::from_bytes(TEST_PO.as_bytes()).expect("fixture catalog")
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Unknown msgids come back verbatim
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gettext_unknown_msgid_is_identity(msgid in "[a-z .]{1,40}") {
        let catalog = fixture();
        prop_assume!(catalog.try_gettext(&msgid).is_err());
        prop_assert_eq!(catalog.gettext(&msgid), msgid.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Unknown contexts come back verbatim
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pgettext_unknown_context_is_identity(ctx in "[a-z]{1,20}", msgid in "[a-z]{1,20}") {
        let catalog = fixture();
        prop_assert_eq!(catalog.pgettext(&ctx, &msgid), msgid.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Plural fallback obeys n == 1
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ngettext_unknown_msgid_falls_back_by_count(n in any::<u64>()) {
        let catalog = fixture();
        let picked = catalog.ngettext("no such singular", "no such plural", n);
        if n == 1 {
            prop_assert_eq!(picked, "no such singular");
        } else {
            prop_assert_eq!(picked, "no such plural");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. try/silent agreement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn silent_and_try_variants_agree(n in any::<u64>()) {
        let catalog = fixture();
        let msgid = "%d user likes this.";
        match catalog.try_ngettext(msgid, n) {
            Ok(form) => prop_assert_eq!(catalog.ngettext(msgid, "plural", n), form),
            Err(_) => {
                let fallback = if n == 1 { msgid } else { "plural" };
                prop_assert_eq!(catalog.ngettext(msgid, "plural", n), fallback);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Load determinism
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn two_loads_of_the_same_bytes_are_equal() {
    let first = fixture();
    let second = fixture();
    assert_eq!(first.messages(), second.messages());
}

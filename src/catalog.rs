use serde::Serialize;

/// Selection value meaning "do not filter by type".
pub const ALL_TYPES: &str = "all";

const ALL_TYPES_LABEL: &str = "All Types";
const UNKNOWN_ICON: &str = "fas fa-question-circle";
const UNKNOWN_COLOR: &str = "#95a5a6";

/// Display metadata for one transaction type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Singular name used in table rows ("Payment")
    pub display_name: String,
    /// Grouped name used in the type filter and the chart legend ("Payments")
    pub group_label: String,
    pub icon_tag: &'static str,
    pub color_token: &'static str,
}

struct CatalogEntry {
    code: &'static str,
    display_name: &'static str,
    group_label: &'static str,
    icon_tag: &'static str,
    color_token: &'static str,
}

const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        code: "incoming_money",
        display_name: "Incoming Money",
        group_label: "Incoming Money",
        icon_tag: "fas fa-download",
        color_token: "#2ecc71",
    },
    CatalogEntry {
        code: "payment_code_holder",
        display_name: "Payment",
        group_label: "Payments",
        icon_tag: "fas fa-money-bill-wave",
        color_token: "#9b59b6",
    },
    CatalogEntry {
        code: "transfer_mobile",
        display_name: "Transfer",
        group_label: "Transfers",
        icon_tag: "fas fa-exchange-alt",
        color_token: "#3498db",
    },
    CatalogEntry {
        code: "bank_deposit",
        display_name: "Bank Deposit",
        group_label: "Bank Deposits",
        icon_tag: "fas fa-building",
        color_token: "#16a085",
    },
    CatalogEntry {
        code: "airtime_payment",
        display_name: "Airtime",
        group_label: "Airtime",
        icon_tag: "fas fa-phone-alt",
        color_token: "#f39c12",
    },
    CatalogEntry {
        code: "cash_power",
        display_name: "Cash Power",
        group_label: "Cash Power",
        icon_tag: "fas fa-bolt",
        color_token: "#d35400",
    },
    CatalogEntry {
        code: "third_party",
        display_name: "Third Party",
        group_label: "Third Party",
        icon_tag: "fas fa-user-friends",
        color_token: "#7f8c8d",
    },
    CatalogEntry {
        code: "agent_withdrawal",
        display_name: "Withdrawal",
        group_label: "Withdrawals",
        icon_tag: "fas fa-upload",
        color_token: "#e74c3c",
    },
    CatalogEntry {
        code: "bank_transfer",
        display_name: "Bank Transfer",
        group_label: "Bank Transfers",
        icon_tag: "fas fa-university",
        color_token: "#2980b9",
    },
    CatalogEntry {
        code: "bundle_purchase",
        display_name: "Bundle",
        group_label: "Bundles",
        icon_tag: "fas fa-wifi",
        color_token: "#8e44ad",
    },
];

/// Static lookup from transaction type code to display metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCatalog;

impl TypeCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: unknown codes get a grey question-mark entry named after the code.
    pub fn describe(&self, code: &str) -> TypeDescriptor {
        match ENTRIES.iter().find(|entry| entry.code == code) {
            Some(entry) => TypeDescriptor {
                display_name: entry.display_name.to_string(),
                group_label: entry.group_label.to_string(),
                icon_tag: entry.icon_tag,
                color_token: entry.color_token,
            },
            None => TypeDescriptor {
                display_name: code.to_string(),
                group_label: code.to_string(),
                icon_tag: UNKNOWN_ICON,
                color_token: UNKNOWN_COLOR,
            },
        }
    }

    /// Options for the type selector, `("all", "All Types")` first.
    pub fn list_filter_options(&self) -> Vec<(&'static str, &'static str)> {
        std::iter::once((ALL_TYPES, ALL_TYPES_LABEL))
            .chain(ENTRIES.iter().map(|entry| (entry.code, entry.group_label)))
            .collect()
    }

    pub fn is_known(&self, code: &str) -> bool {
        ENTRIES.iter().any(|entry| entry.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        let descriptor = TypeCatalog::new().describe("agent_withdrawal");
        assert_eq!(descriptor.display_name, "Withdrawal");
        assert_eq!(descriptor.group_label, "Withdrawals");
        assert_eq!(descriptor.icon_tag, "fas fa-upload");
        assert_eq!(descriptor.color_token, "#e74c3c");
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let descriptor = TypeCatalog::new().describe("loan_repayment");
        assert_eq!(descriptor.display_name, "loan_repayment");
        assert_eq!(descriptor.icon_tag, UNKNOWN_ICON);
        assert_eq!(descriptor.color_token, UNKNOWN_COLOR);
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = TypeCatalog::new().list_filter_options();
        assert_eq!(options.len(), 11);
        assert_eq!(options[0], ("all", "All Types"));
        assert_eq!(options[2], ("payment_code_holder", "Payments"));
        assert!(options.iter().skip(1).all(|(code, _)| TypeCatalog::new().is_known(code)));
    }
}

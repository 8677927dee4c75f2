//! # Static Content
//!
//! Every piece of "data" the app shows: service catalogues, application
//! history, agent and customer details, cash-counter figures. All of it is
//! compiled-in, immutable, and bilingual (English/Kannada) where the branch
//! signage is. Records here have no lifecycle; the presentation layer reads
//! them, nothing writes them.
//!
//! The core only hands screens two things: their title and their list of
//! interactive items. What an item *does* is an [`Activation`], so the
//! event loop never needs to know what a screen looks like.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::screen::ScreenId;

/// Which of the two label languages to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Kannada,
    /// Both, separated by " / " — the default, matching the branch signage.
    #[default]
    Bilingual,
}

impl Language {
    pub fn next(self) -> Self {
        match self {
            Language::Bilingual => Language::English,
            Language::English => Language::Kannada,
            Language::Kannada => Language::Bilingual,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Bilingual => "English / ಕನ್ನಡ",
        }
    }
}

/// An English/Kannada label pair. `kn` may be empty; display then falls
/// back to English regardless of the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub en: &'static str,
    pub kn: &'static str,
}

impl Label {
    pub const fn new(en: &'static str, kn: &'static str) -> Self {
        Self { en, kn }
    }

    pub const fn english(en: &'static str) -> Self {
        Self { en, kn: "" }
    }

    pub fn display(&self, language: Language) -> String {
        match language {
            _ if self.kn.is_empty() => self.en.to_string(),
            Language::English => self.en.to_string(),
            Language::Kannada => self.kn.to_string(),
            Language::Bilingual => format!("{} / {}", self.en, self.kn),
        }
    }
}

/// An action outside the app: handed to the platform fire-and-forget,
/// never alters navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    Call(&'static str),
    WhatsApp,
    Maps,
}

impl ExternalLink {
    pub fn describe(self) -> String {
        match self {
            ExternalLink::Call(number) => format!("Calling {number}"),
            ExternalLink::WhatsApp => String::from("Opening WhatsApp chat"),
            ExternalLink::Maps => String::from("Opening in Maps"),
        }
    }
}

/// What activating a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Goto(ScreenId),
    External(ExternalLink),
    CycleLanguage,
    /// Display-only tap target (toggles, security rows). Harmless no-op.
    None,
}

/// One interactive row on a screen.
pub struct MenuItem {
    pub icon: &'static str,
    pub label: Label,
    pub detail: Label,
    pub activation: Activation,
}

const NO_DETAIL: Label = Label::english("");

// ============================================================================
// Brand / people
// ============================================================================

pub const BANK_NAME: &str = "Bank of Baroda";
pub const BANK_TAGLINE: &str = "Mini Branch";
pub const BRANCH_HEADLINE: &str = "Branch at Chadachan";

pub const AGENT_NAME: &str = "Prakash IRAMANI";
pub const AGENT_ROLE: &str = "BC Banking Agent";
pub const AGENT_BADGE: &str = "Verified BC Agent";
pub const AGENT_ADDRESS: &str = "Near APMC Car Parking, Opposite Bank of Baroda, Chadachan";
pub const AGENT_PHONE_DISPLAY: &str = "63616 39923";
pub const AGENT_PHONES: &str = "6361639923, 9591426100";
pub const SERVICE_HOURS: &str = "Mon - Sat: 9:30 AM to 6:30 PM";

pub const CUSTOMER_NAME: &str = "Sandeep Kumar";
pub const CUSTOMER_ID: &str = "Cust ID: 987654321";

// ============================================================================
// Screen titles
// ============================================================================

/// Header title for each screen. Total over the enum on purpose: a ninth
/// screen will not compile until it gets a title.
pub fn screen_title(screen: ScreenId) -> Label {
    match screen {
        ScreenId::Home => Label::english(BANK_NAME),
        ScreenId::Services => Label::new("Select Service", "ಸೇವೆಗಳ ಆಯ್ಕೆ"),
        ScreenId::Upload => Label::new("Document Upload", "ದಾಖಲೆ ಅಪ್\u{200c}ಲೋಡ್"),
        ScreenId::History => Label::new("Status & History", "ಸ್ಥಿತಿ ಮತ್ತು ಇತಿಹಾಸ"),
        ScreenId::Profile => Label::new("User Profile", "ಬಳಕೆದಾರರ ವಿವರ"),
        ScreenId::AgentProfile => Label::english("Agent Profile"),
        ScreenId::Settings => Label::new("Settings", "ಸಂಯೋಜನೆಗಳು"),
        ScreenId::CashCounter => Label::new("Cash Counter", "ನಗದು ಕೌಂಟರ್"),
    }
}

// ============================================================================
// Interactive menus, one per screen
// ============================================================================

pub const HOME_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "🏦",
        label: Label::english(BRANCH_HEADLINE),
        detail: Label::english(AGENT_BADGE),
        activation: Activation::Goto(ScreenId::AgentProfile),
    },
    MenuItem {
        icon: "☎",
        label: Label::new("Call Now", "ಕರೆ ಮಾಡಿ"),
        detail: Label::english(AGENT_PHONE_DISPLAY),
        activation: Activation::External(ExternalLink::Call(AGENT_PHONE_DISPLAY)),
    },
    MenuItem {
        icon: "₹",
        label: Label::english("Cash Counter"),
        detail: Label::english("Manage Cash"),
        activation: Activation::Goto(ScreenId::CashCounter),
    },
    MenuItem {
        icon: "✆",
        label: Label::english("WhatsApp Us"),
        detail: Label::english("Chat with Agent"),
        activation: Activation::External(ExternalLink::WhatsApp),
    },
    MenuItem {
        icon: "₹",
        label: Label::new("Cash Deposit", "ನಗದು ಠೇವಣಿ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "⇡",
        label: Label::new("Withdrawal", "ನಗದು ಹಿಂಪಡೆಯುವಿಕೆ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "⚖",
        label: Label::new("Balance", "ಬ್ಯಾಲೆನ್ಸ್ ವಿಚಾರಣೆ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "▤",
        label: Label::new("Mini Statement", "ಮಿನಿ ಸ್ಟೇಟ್ಮೆಂಟ್"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "＋",
        label: Label::new("New Account", "ಹೊಸ ಖಾತೆ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "⇄",
        label: Label::new("Fund Transfer", "ಹಣ ವರ್ಗಾವಣೆ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "🌾",
        label: Label::new("Agriculture Loan", "ಕೃಷಿ ಸಾಲ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
    MenuItem {
        icon: "🏪",
        label: Label::new("Mudra Loan", "ಮುದ್ರಾ ಸಾಲ"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Services),
    },
];

pub const SERVICES_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "＋",
        label: Label::new("New Account Opening", "ಹೊಸ ಖಾತೆ ತೆರೆಯುವುದು"),
        detail: Label::english("Open savings/current accounts"),
        activation: Activation::Goto(ScreenId::Upload),
    },
    MenuItem {
        icon: "₹",
        label: Label::new("Money Transfer", "ಹಣ ವರ್ಗಾವಣೆ"),
        detail: Label::english("Instant Domestic Money Transfer"),
        activation: Activation::Goto(ScreenId::Upload),
    },
    MenuItem {
        icon: "☝",
        label: Label::new("AEPS Cash Withdrawal", "ಹಣ ಹಿಂಪಡೆಯುವುದು"),
        detail: Label::english("Withdraw using Aadhaar"),
        activation: Activation::Goto(ScreenId::Upload),
    },
    MenuItem {
        icon: "⛓",
        label: Label::new("Aadhaar Seeding", "ಆಧಾರ್ ಸೀಡಿಂಗ್"),
        detail: Label::english("Link Aadhaar with Bank Account"),
        activation: Activation::Goto(ScreenId::Upload),
    },
    MenuItem {
        icon: "◉",
        label: Label::new("Gold Loan", "ಚಿನ್ನದ ಸಾಲ"),
        detail: Label::english("Apply for Gold Loan"),
        activation: Activation::Goto(ScreenId::Upload),
    },
    MenuItem {
        icon: "♥",
        label: Label::new("Insurance / Pension", "ವಿಮೆ / ಪಿಂಚಣಿ"),
        detail: Label::english("PMJJBY, PMSBY, and APY schemes"),
        activation: Activation::Goto(ScreenId::Upload),
    },
];

pub const PROFILE_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "✎",
        label: Label::new("Edit Profile", "ಪ್ರೊಫೈಲ್ ತಿದ್ದಿ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
    MenuItem {
        icon: "⚙",
        label: Label::new("Settings", "ಸಂಯೋಜನೆಗಳು"),
        detail: NO_DETAIL,
        activation: Activation::Goto(ScreenId::Settings),
    },
];

pub const AGENT_PROFILE_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "☎",
        label: Label::english("Call Agent"),
        detail: Label::english(AGENT_PHONE_DISPLAY),
        activation: Activation::External(ExternalLink::Call(AGENT_PHONE_DISPLAY)),
    },
    MenuItem {
        icon: "✉",
        label: Label::english("Message"),
        detail: NO_DETAIL,
        activation: Activation::External(ExternalLink::WhatsApp),
    },
    MenuItem {
        icon: "⚐",
        label: Label::english("Open in Maps"),
        detail: Label::english(AGENT_ADDRESS),
        activation: Activation::External(ExternalLink::Maps),
    },
];

pub const SETTINGS_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "文",
        label: Label::english("Select Language"),
        detail: Label::english("English / ಕನ್ನಡ"),
        activation: Activation::CycleLanguage,
    },
    MenuItem {
        icon: "🔔",
        label: Label::new("App Notifications", "ಅಪ್ಲಿಕೇಶನ್ ಅಧಿಸೂಚನೆಗಳು"),
        detail: Label::english("On"),
        activation: Activation::None,
    },
    MenuItem {
        icon: "✉",
        label: Label::new("Email Alerts", "ಇಮೇಲ್ ಎಚ್ಚರಿಕೆಗಳು"),
        detail: Label::english("Off"),
        activation: Activation::None,
    },
    MenuItem {
        icon: "▣",
        label: Label::new("SMS Alerts", "ಎಸ್ಎಮ್ಎಸ್ ಎಚ್ಚರಿಕೆಗಳು"),
        detail: Label::english("On"),
        activation: Activation::None,
    },
    MenuItem {
        icon: "🔒",
        label: Label::new("Change MPIN", "MPIN ಬದಲಾಯಿಸಿ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
    MenuItem {
        icon: "☝",
        label: Label::new("Biometric Login", "ಬಯೋಮೆಟ್ರಿಕ್ ಲಾಗಿನ್"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
    MenuItem {
        icon: "⌸",
        label: Label::new("Manage Devices", "ಸಾಧನಗಳನ್ನು ನಿರ್ವಹಿಸಿ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
];

pub const CASH_COUNTER_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "₹",
        label: Label::new("Cash Deposit", "ನಗದು ಜಮೆ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
    MenuItem {
        icon: "⇡",
        label: Label::new("Cash Withdrawal", "ನಗದು ಹಿಂಪಡೆಯುವಿಕೆ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
    MenuItem {
        icon: "⚖",
        label: Label::new("Balance Enquiry", "ಬ್ಯಾಲೆನ್ಸ್ ವಿಚಾರಣೆ"),
        detail: NO_DETAIL,
        activation: Activation::None,
    },
];

/// Interactive items for a screen. Empty for screens whose interaction is
/// handled elsewhere (the upload form) or display-only (history).
pub fn menu_for(screen: ScreenId) -> &'static [MenuItem] {
    match screen {
        ScreenId::Home => HOME_MENU,
        ScreenId::Services => SERVICES_MENU,
        ScreenId::Upload => &[],
        ScreenId::History => &[],
        ScreenId::Profile => PROFILE_MENU,
        ScreenId::AgentProfile => AGENT_PROFILE_MENU,
        ScreenId::Settings => SETTINGS_MENU,
        ScreenId::CashCounter => CASH_COUNTER_MENU,
    }
}

// ============================================================================
// Display-only records
// ============================================================================

/// Status category of an application record. The terminal color for each
/// category lives in the TUI layer; core only knows the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Pending,
    Completed,
    InProgress,
    Rejected,
}

impl StatusKind {
    pub fn label(self) -> Label {
        match self {
            StatusKind::Pending => Label::new("Pending", "ಬಾಕಿ"),
            StatusKind::Completed => Label::new("Completed", "ಯಶಸ್ವಿ"),
            StatusKind::InProgress => Label::new("In Progress", "ಪ್ರಗತಿಯಲ್ಲಿದೆ"),
            StatusKind::Rejected => Label::new("Rejected", "ತಿರಸ್ಕರಿಸಲಾಗಿದೆ"),
        }
    }
}

pub struct HistoryEntry {
    pub icon: &'static str,
    pub title: Label,
    pub status: StatusKind,
    pub date: &'static str,
}

pub const HISTORY_ENTRIES: &[HistoryEntry] = &[
    HistoryEntry {
        icon: "＋",
        title: Label::new("New Account Opening", "ಹೊಸ ಖಾತೆ ಪ್ರಾರಂಭ"),
        status: StatusKind::Pending,
        date: "24 Oct 2023",
    },
    HistoryEntry {
        icon: "₹",
        title: Label::new("Money Transfer", "ಹಣ ವರ್ಗಾವಣೆ"),
        status: StatusKind::Completed,
        date: "22 Oct 2023",
    },
    HistoryEntry {
        icon: "▥",
        title: Label::new("Debit Card Reissue", "ಡೆಬಿಟ್ ಕಾರ್ಡ್ ಮರು ವಿತರಣೆ"),
        status: StatusKind::InProgress,
        date: "20 Oct 2023",
    },
    HistoryEntry {
        icon: "▤",
        title: Label::new("Home Loan Application", "ಗೃಹ ಸಾಲದ ಅರ್ಜಿ"),
        status: StatusKind::Rejected,
        date: "15 Oct 2023",
    },
];

pub const MONTHLY_SUMMARY: Label = Label::new("4 Requests Processed", "ಮಾಸಿಕ ಸಾರಾಂಶ");

pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const AGENT_STATS: &[Stat] = &[
    Stat { icon: "⏳", label: "Experience", value: "8+ Years" },
    Stat { icon: "👥", label: "Customers", value: "1,000+" },
    Stat { icon: "★", label: "Rating", value: "4.9 / 5" },
];

pub const BRANCH_DETAILS: &[Stat] = &[
    Stat { icon: "⚐", label: "Address", value: AGENT_ADDRESS },
    Stat { icon: "☎", label: "Direct Contacts", value: AGENT_PHONES },
    Stat { icon: "⏲", label: "Service Hours", value: SERVICE_HOURS },
];

pub struct ProfileField {
    pub label: &'static str,
    pub value: &'static str,
    pub value_kn: &'static str,
    pub verified: bool,
}

pub const PROFILE_FIELDS: &[ProfileField] = &[
    ProfileField {
        label: "Full Name",
        value: CUSTOMER_NAME,
        value_kn: "ಸಂದೀಪ್ ಕುಮಾರ್",
        verified: false,
    },
    ProfileField {
        label: "Date of Birth",
        value: "15 May 1988",
        value_kn: "೧೫ ಮೇ ೧೯೮೮",
        verified: false,
    },
    ProfileField {
        label: "PAN Card",
        value: "ABCDE1234F",
        value_kn: "",
        verified: true,
    },
];

pub const LINKED_ACCOUNT: Stat = Stat {
    icon: "₹",
    label: "Savings Account · A/C: XXXX XXXX 4567",
    value: "₹ 45,230.00",
};

/// Cash-counter figures. `tone` picks the terminal color in the TUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Credit,
    Debit,
    Net,
}

pub struct SummaryRow {
    pub icon: &'static str,
    pub label: Label,
    pub amount: &'static str,
    pub tone: Tone,
}

pub const CASH_IN_HAND: &str = "₹45,250.00";
pub const CASH_IN_HAND_LABEL: Label = Label::new("Cash in Hand", "ನಿಮ್ಮಲ್ಲಿರುವ ನಗದು");
pub const ACTIVE_SESSION_LABEL: Label = Label::new("Active Session", "ಸಕ್ರಿಯ ಸೆಶನ್");

pub const DAILY_SUMMARY: &[SummaryRow] = &[
    SummaryRow {
        icon: "↗",
        label: Label::new("Total Deposits", "ಒಟ್ಟು ಜಮೆ"),
        amount: "+ ₹1,12,000",
        tone: Tone::Credit,
    },
    SummaryRow {
        icon: "↘",
        label: Label::new("Total Withdrawals", "ಒಟ್ಟು ಹಿಂಪಡೆಯುವಿಕೆ"),
        amount: "- ₹66,750",
        tone: Tone::Debit,
    },
    SummaryRow {
        icon: "⇅",
        label: Label::new("Net Cash Flow", "ನಿವ್ವಳ ನಗದು ಹರಿವು"),
        amount: "₹45,250",
        tone: Tone::Net,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_cycle_returns_after_three() {
        let start = Language::Bilingual;
        assert_eq!(start.next().next().next(), start);
        assert_ne!(start.next(), start);
    }

    #[test]
    fn test_label_display_modes() {
        let label = Label::new("Cash Deposit", "ನಗದು ಠೇವಣಿ");
        assert_eq!(label.display(Language::English), "Cash Deposit");
        assert_eq!(label.display(Language::Kannada), "ನಗದು ಠೇವಣಿ");
        assert_eq!(label.display(Language::Bilingual), "Cash Deposit / ನಗದು ಠೇವಣಿ");
    }

    #[test]
    fn test_label_without_kannada_falls_back_to_english() {
        let label = Label::english("Agent Profile");
        assert_eq!(label.display(Language::Kannada), "Agent Profile");
        assert_eq!(label.display(Language::Bilingual), "Agent Profile");
    }

    #[test]
    fn test_every_screen_has_a_title() {
        for screen in ScreenId::ALL {
            assert!(!screen_title(screen).en.is_empty(), "{screen:?}");
        }
    }

    #[test]
    fn test_menu_labels_are_non_empty() {
        for screen in ScreenId::ALL {
            for item in menu_for(screen) {
                assert!(!item.label.en.is_empty(), "{screen:?}");
                assert!(!item.icon.is_empty(), "{screen:?}");
            }
        }
    }

    #[test]
    fn test_services_all_lead_to_upload() {
        for item in SERVICES_MENU {
            assert_eq!(item.activation, Activation::Goto(ScreenId::Upload));
        }
    }

    #[test]
    fn test_history_has_one_entry_per_status() {
        assert_eq!(HISTORY_ENTRIES.len(), 4);
        let kinds: Vec<StatusKind> = HISTORY_ENTRIES.iter().map(|e| e.status).collect();
        assert!(kinds.contains(&StatusKind::Pending));
        assert!(kinds.contains(&StatusKind::Completed));
        assert!(kinds.contains(&StatusKind::InProgress));
        assert!(kinds.contains(&StatusKind::Rejected));
    }

    #[test]
    fn test_external_link_descriptions() {
        assert_eq!(
            ExternalLink::Call("63616 39923").describe(),
            "Calling 63616 39923"
        );
        assert!(ExternalLink::WhatsApp.describe().contains("WhatsApp"));
    }
}

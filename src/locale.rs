//! Static per-language string tables.
//!
//! Every user-facing label goes through [`translate`]. A key with no entry
//! for the language falls back to the key itself.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::selection::Language;

pub type Table = BTreeMap<&'static str, &'static str>;

const EN: &[(&str, &str)] = &[
    ("weatherDashboard", "Weather Dashboard"),
    ("device", "Device"),
    ("chartStyle", "Chart Style"),
    ("line", "Line"),
    ("bar", "Bar"),
    ("dateRange", "Date Range"),
    ("today", "Today"),
    ("last6Hours", "Last 6 Hours"),
    ("last12Hours", "Last 12 Hours"),
    ("last24Hours", "Last 24 Hours"),
    ("last7Days", "Last 7 Days"),
    ("last30Days", "Last 30 Days"),
    ("loading", "Loading..."),
    ("failedToFetch", "Failed to fetch data:"),
    (
        "noDataFound",
        "No data found for the selected device and time range. Please try a different selection.",
    ),
    ("latestConditions", "Latest Conditions"),
    ("noRecentData", "No recent data available."),
    ("batteryStatus", "Battery Status"),
    ("battery", "Battery"),
    ("temperature", "Temperature"),
    ("relativeHumidity", "Relative Humidity"),
    ("windrose", "Windrose"),
    ("noWindData", "No wind data available."),
    ("barometricPressure", "Barometric Pressure"),
    ("windSpeed", "Wind Speed"),
    ("windDirection", "Wind Direction"),
    ("gustSpeed", "Gust Speed"),
    ("rainfall", "Rainfall"),
    ("accumulatedRain", "Accumulated Rain"),
    ("dewPoint", "Dew Point"),
    ("batteryHistory", "Battery History"),
    ("airTemperature", "Air Temperature"),
    ("noDataFor", "No data for"),
    ("currentWind", "Current Wind"),
];

const MY: &[(&str, &str)] = &[
    ("weatherDashboard", "ရာသီဥတု ဒက်ရှ်ဘုတ်"),
    ("device", "စက်ပစ္စည်း"),
    ("chartStyle", "ဇယားပုံစံ"),
    ("line", "လိုင်း"),
    ("bar", "ဘား"),
    ("dateRange", "ရက်စွဲအပိုင်းအခြား"),
    ("today", "ယနေ့"),
    ("last6Hours", "နောက်ဆုံး ၆ နာရီ"),
    ("last12Hours", "နောက်ဆုံး ၁၂ နာရီ"),
    ("last24Hours", "နောက်ဆုံး ၂၄ နာရီ"),
    ("last7Days", "နောက်ဆုံး ၇ ရက်"),
    ("last30Days", "နောက်ဆုံး ရက် ၃၀"),
    ("loading", "တင်နေသည်..."),
    ("failedToFetch", "ဒေတာရယူရန် မအောင်မြင်ပါ:"),
    (
        "noDataFound",
        "ရွေးချယ်ထားသော စက်နှင့် အချိန်အတွက် ဒေတာမတွေ့ပါ။ ကျေးဇူးပြု၍ အခြားတစ်ခုကို ရွေးချယ်စမ်းကြည့်ပါ။",
    ),
    ("latestConditions", "နောက်ဆုံးအခြေအနေများ"),
    ("noRecentData", "လတ်တလောဒေတာမရှိပါ။"),
    ("batteryStatus", "ဘက်ထရီအခြေအနေ"),
    ("battery", "ဘက်ထရီ"),
    ("temperature", "အပူချိန်"),
    ("relativeHumidity", "စိုထိုင်းဆ"),
    ("windrose", "လေညွှန်ကားချပ်"),
    ("noWindData", "လေဒေတာမရှိပါ။"),
    ("barometricPressure", "လေဖိအား"),
    ("windSpeed", "လေတိုက်နှုန်း"),
    ("windDirection", "လေညွှန်"),
    ("gustSpeed", "လေပြင်းတိုက်နှုန်း"),
    ("rainfall", "မိုးရေချိန်"),
    ("accumulatedRain", "စုစုပေါင်းမိုးရေချိန်"),
    ("dewPoint", "နှင်းရည်မှတ်"),
    ("batteryHistory", "ဘက်ထရီမှတ်တမ်း"),
    ("airTemperature", "လေထုအပူချိန်"),
    ("noDataFor", "အတွက် ဒေတာမရှိပါ"),
    ("currentWind", "လက်ရှိလေ"),
];

static TABLES: LazyLock<[Table; 2]> =
    LazyLock::new(|| [EN.iter().copied().collect(), MY.iter().copied().collect()]);

#[must_use]
pub fn table(language: Language) -> &'static Table {
    match language {
        Language::En => &TABLES[0],
        Language::My => &TABLES[1],
    }
}

/// Look up `key`, falling back to the key itself.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    table(language).get(key).copied().unwrap_or(key)
}

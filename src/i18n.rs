use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_PAYMENT: &str = "main_menu.payment";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const PROMPT_ANNUAL_FUEL_COST: &str = "prompt.annual_fuel_cost";
    pub const PROMPT_UNIT_PRICE: &str = "prompt.unit_price";
    pub const ROI_POTENTIAL_SAVINGS: &str = "roi.potential_savings";
    pub const ROI_UNIT_PRICE: &str = "roi.unit_price";
    pub const ROI_BREAKEVEN: &str = "roi.breakeven";
    pub const ROI_MONTHS: &str = "roi.months";
    pub const ROI_MONTHLY_HEADING: &str = "roi.monthly_heading";
    pub const ROI_MONTHLY_COST: &str = "roi.monthly_cost";
    pub const ROI_MONTHLY_SAVINGS: &str = "roi.monthly_savings";
    pub const ROI_NET_SAVINGS: &str = "roi.net_savings";

    pub const PAYMENT_HEADING: &str = "payment.heading";
    pub const PAYMENT_CONFIG_HEADING: &str = "payment.config_heading";
    pub const PROMPT_UNIT_COUNT: &str = "prompt.unit_count";
    pub const PAYMENT_TOTAL_COST: &str = "payment.total_cost";
    pub const PAYMENT_OPTIONS_HEADING: &str = "payment.options_heading";
    pub const PAYMENT_INITIAL_DOWN: &str = "payment.initial_down";
    pub const PAYMENT_MONTHLY: &str = "payment.monthly";
    pub const PAYMENT_TOTAL_PAYMENT: &str = "payment.total_payment";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_VALUE_CLAMPED: &str = "note.value_clamped";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let s = match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        };
        s.to_string()
    }
}

/// `{name}` 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            tracing::warn!(path = %path.display(), "language pack ignored: not a string table");
        }
        map
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Calculator ===",
        MAIN_MENU_ROI => "1) ROI 계산기",
        MAIN_MENU_PAYMENT => "2) 분할 납부 계산기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ROI_HEADING => "\n-- ROI 계산기 --",
        PROMPT_ANNUAL_FUEL_COST => "최장 노선 연간 경유 연료비 ($) [{default}]: ",
        PROMPT_UNIT_PRICE => "유닛 가격 ($) [{default}]: ",
        ROI_POTENTIAL_SAVINGS => "연간 예상 절감액 (10%)",
        ROI_UNIT_PRICE => "유닛 가격",
        ROI_BREAKEVEN => "손익분기 시점",
        ROI_MONTHS => "개월",
        ROI_MONTHLY_HEADING => "월 비용 vs. 절감액",
        ROI_MONTHLY_COST => "현재 월 연료비",
        ROI_MONTHLY_SAVINGS => "유닛 도입 시 월 절감액",
        ROI_NET_SAVINGS => "향후 4년 예상 순절감액",
        PAYMENT_HEADING => "\n-- 분할 납부 계산기 --",
        PAYMENT_CONFIG_HEADING => "유닛 구성",
        PROMPT_UNIT_COUNT => "유닛 수량 [{default}]: ",
        PAYMENT_TOTAL_COST => "총 구매 금액",
        PAYMENT_OPTIONS_HEADING => "납부 옵션",
        PAYMENT_INITIAL_DOWN => "계약금",
        PAYMENT_MONTHLY => "11회 월 납부액",
        PAYMENT_TOTAL_PAYMENT => "총 납부액",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 자동  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_VALUE_CLAMPED => "최소값은 {min} 입니다. {value} 로 계산합니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Calculator ===",
        MAIN_MENU_ROI => "1) ROI Calculator",
        MAIN_MENU_PAYMENT => "2) Payment Options Calculator",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ROI_HEADING => "\n-- ROI Calculator --",
        PROMPT_ANNUAL_FUEL_COST => "Annual diesel fuel cost for longest route ($) [{default}]: ",
        PROMPT_UNIT_PRICE => "Unit Price ($) [{default}]: ",
        ROI_POTENTIAL_SAVINGS => "Potential annual savings (10%)",
        ROI_UNIT_PRICE => "Unit price",
        ROI_BREAKEVEN => "Break-even time",
        ROI_MONTHS => "months",
        ROI_MONTHLY_HEADING => "Monthly Cost vs. Savings",
        ROI_MONTHLY_COST => "Current monthly cost",
        ROI_MONTHLY_SAVINGS => "Monthly savings with unit",
        ROI_NET_SAVINGS => "Potential net savings over next 4 years",
        PAYMENT_HEADING => "\n-- Payment Options Calculator --",
        PAYMENT_CONFIG_HEADING => "Unit Configuration",
        PROMPT_UNIT_COUNT => "Number of Units [{default}]: ",
        PAYMENT_TOTAL_COST => "Total Cost",
        PAYMENT_OPTIONS_HEADING => "Payment Options",
        PAYMENT_INITIAL_DOWN => "Initial Down Payment",
        PAYMENT_MONTHLY => "11 Monthly Payments",
        PAYMENT_TOTAL_PAYMENT => "Total Payment",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Auto  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_VALUE_CLAMPED => "Minimum is {min}; using {value}.",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lang_aliases() {
        assert_eq!(normalize_lang("EN"), Some("en-us".into()));
        assert_eq!(normalize_lang("en-uk"), Some("en-us".into()));
        assert_eq!(normalize_lang("ko"), Some("ko-kr".into()));
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_lang("fr"), None);
    }

    #[test]
    fn locale_string_strips_region_and_encoding() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8"), Some("ko-kr".into()));
        assert_eq!(normalize_locale_string("en-GB"), Some("en-us".into()));
        assert_eq!(normalize_locale_string("C"), None);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[gui.roi]\nheading = \"ROI\"\n").expect("map");
        assert_eq!(map.get("gui.roi.heading").map(String::as_str), Some("ROI"));
    }

    #[test]
    fn built_in_packs_parse() {
        assert!(built_in_pack("en-us").is_some());
        assert!(built_in_pack("ko-kr").is_some());
        assert!(built_in_pack("de-de").is_none());
    }

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("nope.missing"), "[missing translation]");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
    }
}

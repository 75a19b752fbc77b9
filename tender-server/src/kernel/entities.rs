pub type Username = String;

pub const DEFAULT_PAGE_LIMIT: i64 = 5;
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Normalized pagination window. Raw query values are clamped, never rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    pub limit:  i64,
    pub offset: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit:  DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PageParams {
    /// Builds a window from raw query values. Unparseable or non-positive
    /// limits fall back to the default, limits above the cap are capped,
    /// unparseable or negative offsets start from zero.
    pub fn clamped(limit: Option<String>, offset: Option<String>) -> Self {
        let limit = match limit.as_deref().map(str::parse::<i64>) {
            Some(Ok(limit)) if limit > 0 => limit.min(MAX_PAGE_LIMIT),
            _ => DEFAULT_PAGE_LIMIT,
        };
        let offset = match offset.as_deref().map(str::parse::<i64>) {
            Some(Ok(offset)) if offset >= 0 => offset,
            _ => 0,
        };
        Self { limit, offset }
    }
}

/// Collapses an empty string into an absent value. Query parameters and
/// body fields treat the two the same everywhere.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp(limit: Option<&str>, offset: Option<&str>) -> PageParams {
        PageParams::clamped(
            limit.map(str::to_string),
            offset.map(str::to_string),
        )
    }

    #[test]
    fn test_absent_values_use_defaults() {
        assert_eq!(clamp(None, None), PageParams { limit: 5, offset: 0 });
    }

    #[test]
    fn test_valid_values_pass_through() {
        assert_eq!(clamp(Some("20"), Some("7")), PageParams { limit: 20, offset: 7 });
        assert_eq!(clamp(Some("50"), Some("0")), PageParams { limit: 50, offset: 0 });
        assert_eq!(clamp(Some("1"), Some("0")), PageParams { limit: 1, offset: 0 });
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(clamp(Some("51"), None).limit, 50);
        assert_eq!(clamp(Some("500"), None).limit, 50);
        assert_eq!(clamp(Some("0"), None).limit, 5);
        assert_eq!(clamp(Some("-3"), None).limit, 5);
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(clamp(None, Some("-1")).offset, 0);
        assert_eq!(clamp(None, Some("-100")).offset, 0);
    }

    #[test]
    fn test_unparseable_values_use_defaults() {
        assert_eq!(clamp(Some("abc"), Some("xyz")), PageParams { limit: 5, offset: 0 });
        assert_eq!(clamp(Some(""), Some("")), PageParams { limit: 5, offset: 0 });
        assert_eq!(clamp(Some("5.5"), Some("1.2")), PageParams { limit: 5, offset: 0 });
    }

    #[test]
    fn test_non_empty_drops_empty_strings() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(
            non_empty(Some("ivanov".to_string())),
            Some("ivanov".to_string())
        );
    }
}

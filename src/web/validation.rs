use super::WebError;

pub fn parse_episodes(raw: &str) -> Result<i32, WebError> {
    raw.trim().parse().map_err(|_| {
        WebError::validation(format!(
            "Invalid episodes value: '{}'. Episodes must be an integer",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_episodes() {
        assert_eq!(parse_episodes("366").unwrap(), 366);
        assert_eq!(parse_episodes(" 12 ").unwrap(), 12);
        assert_eq!(parse_episodes("0").unwrap(), 0);
        assert_eq!(parse_episodes("-1").unwrap(), -1);
        assert!(parse_episodes("twelve").is_err());
        assert!(parse_episodes("12.5").is_err());
        assert!(parse_episodes("").is_err());
    }

    #[test]
    fn test_parse_episodes_error_names_the_field() {
        let err = parse_episodes("abc").unwrap_err();
        assert!(err.to_string().contains("episodes"));
    }
}

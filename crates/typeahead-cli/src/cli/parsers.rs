pub(crate) const LIMIT_MAX: usize = 20;

pub(crate) fn parse_limit(raw: &str) -> std::result::Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if !(1..=LIMIT_MAX).contains(&value) {
        return Err(format!(
            "limit must be within [1, {LIMIT_MAX}], got {value}"
        ));
    }
    Ok(value)
}

pub(super) fn parse_min_one_usize(raw: &str) -> std::result::Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if value == 0 {
        return Err("value must be >= 1".to_string());
    }
    Ok(value)
}

use anyhow::Result;

/// 规范化服务端基地址
///
/// 去除首尾空白与末尾的斜杠；没有 http/https 前缀的
/// 地址视为非法。
pub fn normalize_server_url(
    url: &str,
) -> Result<String> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Server URL cannot be empty");
    }

    if !trimmed.starts_with("http://")
        && !trimmed.starts_with("https://")
    {
        anyhow::bail!(
            "Server URL must start with http:// or https://: {trimmed}"
        );
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// 格式化配置数值
///
/// 整数值不带小数部分（频率等字段按原样回显），其余
/// 使用默认浮点格式。
pub fn format_number(value: f64) -> String {
    if value.is_finite()
        && value.fract() == 0.0
        && value.abs() < 1e15
    {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

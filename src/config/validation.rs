use thiserror::Error;

/// 配置驗證錯誤
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("缺少必要配置項: {0}")]
    MissingField(String),

    #[error("無效的配置值: {0}")]
    InvalidValue(String),

    #[error("配置範圍錯誤: {field} 的值 {value} 不在開區間 ({min}, {max}) 內")]
    RangeError {
        field: String,
        value: String,
        min: String,
        max: String,
    },
}

/// 配置驗證器trait
pub trait Validator {
    /// 驗證配置
    fn validate(&self) -> Result<(), ValidationError>;
}

/// 驗證工具函數
pub struct ValidationUtils;

impl ValidationUtils {
    /// 驗證配置值是否嚴格位於開區間內（NaN 一律視為越界）
    pub fn in_open_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + ToString,
    {
        if !(value > min && value < max) {
            return Err(ValidationError::RangeError {
                field: field_name.to_string(),
                value: value.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(())
    }

    /// 驗證一個選項是否為某些值中的一個
    pub fn one_of(value: &str, options: &[&str], field_name: &str) -> Result<(), ValidationError> {
        if !options.contains(&value) {
            return Err(ValidationError::InvalidValue(format!(
                "{} 的值 {} 不是有效選項: {:?}",
                field_name, value, options
            )));
        }
        Ok(())
    }

    /// 檢查必要的字串欄位是否有值
    pub fn not_empty(value: &str, field_name: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field_name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_open_range() {
        assert!(ValidationUtils::in_open_range(0.2, 0.0, 1.0, "test_field").is_ok());

        // 端點不在開區間內
        let err = ValidationUtils::in_open_range(1.0, 0.0, 1.0, "test_field").unwrap_err();
        match err {
            ValidationError::RangeError { field, value, min, max } => {
                assert_eq!(field, "test_field");
                assert_eq!(value, "1");
                assert_eq!(min, "0");
                assert_eq!(max, "1");
            }
            _ => panic!("Expected RangeError"),
        }
        assert!(ValidationUtils::in_open_range(0.0, 0.0, 1.0, "test_field").is_err());
        assert!(ValidationUtils::in_open_range(f64::NAN, 0.0, 1.0, "test_field").is_err());
    }

    #[test]
    fn test_one_of() {
        assert!(ValidationUtils::one_of("info", &["info", "debug"], "log.level").is_ok());
        assert!(ValidationUtils::one_of("loud", &["info", "debug"], "log.level").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(ValidationUtils::not_empty("test", "test_field").is_ok());
        assert!(ValidationUtils::not_empty("", "test_field").is_err());
        assert!(ValidationUtils::not_empty("   ", "test_field").is_err());
    }
}

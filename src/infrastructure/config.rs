//! 配置加载与校验

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 商城服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 会话配置
    pub session: SessionConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)，可被 RUST_LOG 覆盖
    pub level: String,
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 携带会话 ID 的 cookie 名称
    pub cookie_name: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "shopeasy_session".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if !is_cookie_token(&self.session.cookie_name) {
            return Err(ConfigError::Validation(format!(
                "无效的 cookie 名称: {:?}",
                self.session.cookie_name
            )));
        }

        Ok(())
    }

    /// 监听地址，形如 `127.0.0.1:5000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

// RFC 6265 cookie-name 即 RFC 7230 token
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 按顺序查找配置文件: 显式路径、`config.toml`、`./config/config.toml`
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    ["config.toml", "./config/config.toml"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// 加载并校验配置，找不到配置文件时使用默认配置
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match locate_config(explicit) {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.session.cookie_name, "shopeasy_session");
        assert_eq!(config.listen_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.http.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cookie_name_validation() {
        let mut config = Config::default();
        for bad in ["", "has space", "semi;colon", "eq=uals"] {
            config.session.cookie_name = bad.to_string();
            assert!(config.validate().is_err(), "{bad:?} 应该被拒绝");
        }

        config.session.cookie_name = "sid-2_x".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.http.port = 8088;
        config.save_to_file(&config_path).unwrap();

        let loaded = load_config(Some(config_path.as_path())).unwrap();
        assert_eq!(loaded.http.port, 8088);
        assert_eq!(loaded.session.cookie_name, config.session.cookie_name);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[http]\nport = 9000\n").unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 9000);
        assert_eq!(loaded.http.bind_address, "127.0.0.1");
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_load_config_validates() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let result = load_config(Some(config_path.as_path()));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}

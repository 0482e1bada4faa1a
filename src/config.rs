/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 排期服务地址
    pub schedule_api_url: String,
    /// 排期请求超时（秒）
    pub request_timeout_secs: u64,
    /// 计划文件路径
    pub plan_file: String,
    /// 计划文件未填写时的每日学习时长
    pub default_daily_hours: f64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_api_url: "http://localhost:5000/api/schedule".to_string(),
            request_timeout_secs: 30,
            plan_file: "plan.toml".to_string(),
            default_daily_hours: crate::models::form::DEFAULT_DAILY_HOURS,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，缺失或无法解析的项使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            schedule_api_url: lookup("SCHEDULE_API_URL").unwrap_or(default.schedule_api_url),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),
            plan_file: lookup("PLAN_FILE").unwrap_or(default.plan_file),
            default_daily_hours: lookup("DEFAULT_DAILY_HOURS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.default_daily_hours),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }
}

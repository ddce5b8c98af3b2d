//! Status Queries

/// 查询服务状态（凭证是否配置、版本信息）
#[derive(Debug, Clone, Default)]
pub struct GetServiceStatus;

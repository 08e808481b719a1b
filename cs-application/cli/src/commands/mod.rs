//! CLI 命令处理模块

pub mod affinity_group;
pub mod alert;
pub mod common; // 公共工具函数
pub mod configuration;
pub mod job;
pub mod output;
pub mod pod;
pub mod raw;
pub mod template;

//! API 命令描述

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::params::{self, Params};

/// 响应负载的形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// 负载即响应对象本身
    Flat,
    /// 负载外面还有一层单键封装，如 `{"pod": {...}}`
    Wrapped,
}

/// 一个可发送的 CloudStack 命令
///
/// 同步命令的负载是去掉 `<command>response` 外层后的对象；
/// 异步命令的负载是任务完成后的 `jobresult`。`SHAPE` 描述的是这个负载。
pub trait ApiCommand: Serialize + Send + Sync {
    /// 线上命令名，如 `createAffinityGroup`
    const NAME: &'static str;

    /// 服务端是否返回 jobid
    const ASYNC: bool;

    const SHAPE: ResponseShape;

    type Response: DeserializeOwned + Send;

    fn to_params(&self) -> Result<Params> {
        params::encode(self)
    }
}

/// 为参数结构体实现 [`ApiCommand`]
///
/// ```ignore
/// api_command!(CreatePodParams => Pod, "createPod", sync, Wrapped);
/// api_command!(DeletePodParams => SuccessResponse, "deletePod", sync, Flat);
/// api_command!(CreateAffinityGroupParams => AffinityGroup, "createAffinityGroup", job, Wrapped);
/// ```
macro_rules! api_command {
    ($params:ty => $resp:ty, $name:literal, sync, $shape:ident) => {
        impl $crate::command::ApiCommand for $params {
            const NAME: &'static str = $name;
            const ASYNC: bool = false;
            const SHAPE: $crate::command::ResponseShape = $crate::command::ResponseShape::$shape;
            type Response = $resp;
        }
    };
    ($params:ty => $resp:ty, $name:literal, job, $shape:ident) => {
        impl $crate::command::ApiCommand for $params {
            const NAME: &'static str = $name;
            const ASYNC: bool = true;
            const SHAPE: $crate::command::ResponseShape = $crate::command::ResponseShape::$shape;
            type Response = $resp;
        }
    };
}

pub(crate) use api_command;

/// 内部实现的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口：隐藏资源真实大小的 fetch 包装器
pub use internal::error::FetchError;
pub use internal::pipeline::config::PrivateFetchConfig;
pub use internal::pipeline::private_fetcher::PrivateFetcher;

/// 字节单位换算
pub mod bytes_unit {
    pub use crate::internal::bytes_unit::*;
}

/// 请求描述、响应结构与传输层抽象，外部可自行实现 [`http::traits::Transport`]
pub mod http {
    pub mod structs {
        use crate::internal;
        pub use internal::http::structs::fetch_request::*;
        pub use internal::http::structs::fetch_response::*;
        pub use internal::http::structs::reqwest_transport::*;
    }

    pub mod enums {
        pub use crate::internal::http::enums::*;
    }

    pub mod traits {
        pub use crate::internal::http::traits::transport::*;
    }
}

/// Range 相关：Content-Range 解析与分段规划
pub mod ranges {
    use crate::internal;
    pub use internal::ranges::byte_range::*;
    pub use internal::ranges::content_range::*;
    pub use internal::ranges::segment_planner::*;
}

/// 子资源完整性（SRI）校验
pub mod integrity {
    use crate::internal;
    pub use internal::integrity::enums::*;
    pub use internal::integrity::functions::*;
    pub use internal::integrity::structs::*;
    pub use internal::integrity::traits::*;
}

/// 流水线各阶段，可单独调用
pub mod pipeline {
    use crate::internal;
    pub use internal::pipeline::merger::*;
    pub use internal::pipeline::negotiator::*;
    pub use internal::pipeline::outcome::*;
    pub use internal::pipeline::random::*;
    pub use internal::pipeline::segment_fetcher::*;
    pub use internal::pipeline::state::*;
}

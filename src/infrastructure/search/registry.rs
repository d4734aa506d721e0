// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::scraper::SerpScraper;
use crate::infrastructure::proxy::ProxyClient;
use crate::infrastructure::search::bing::BingScraper;
use crate::infrastructure::search::google::GoogleScraper;
use crate::infrastructure::search::yahoo::YahooScraper;
use std::collections::HashMap;
use std::sync::Arc;

/// 搜索引擎注册表
///
/// 引擎标识符到抓取器实例的封闭映射。提供方的解析规则
/// 无法泛化，因此这里不是开放扩展点：受支持的集合在
/// 构造时固定。未知标识符返回 `None`，由调用方按跳过处理。
pub struct EngineRegistry {
    engines: HashMap<&'static str, Arc<dyn SerpScraper>>,
}

impl EngineRegistry {
    /// 创建包含全部受支持引擎的注册表
    pub fn new(client: Arc<ProxyClient>) -> Self {
        Self::with_engines(vec![
            Arc::new(GoogleScraper::new(client.clone())),
            Arc::new(BingScraper::new(client.clone())),
            Arc::new(YahooScraper::new(client)),
        ])
    }

    /// 从给定引擎集合构建注册表
    pub fn with_engines(engines: Vec<Arc<dyn SerpScraper>>) -> Self {
        let engines = engines
            .into_iter()
            .map(|engine| (engine.name(), engine))
            .collect();
        Self { engines }
    }

    /// 解析引擎标识符
    ///
    /// 查找对大小写不敏感；未知标识符返回 `None` 而不是错误。
    pub fn resolve(&self, identifier: &str) -> Option<Arc<dyn SerpScraper>> {
        let key = identifier.to_lowercase();
        self.engines.get(key.as_str()).cloned()
    }

    /// 已注册的引擎名称列表
    pub fn registered(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.engines.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

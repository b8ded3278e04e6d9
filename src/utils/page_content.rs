// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// 网页内容处理结果
///
/// 保存清理后的HTML、可读文本和页面内链接
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 移除脚本、样式、表单和导航后的HTML
    pub cleaned_html: String,
    /// 提取的可读文本
    pub text: String,
    /// 绝对化后的页面链接
    pub links: Vec<String>,
}

static EXCLUDED: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script, style, form, nav").expect("static selector"));
static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("static selector"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// 处理抓取到的HTML内容
///
/// 移除非正文标签，提取文本和链接。`base_url`用于将相对链接绝对化，
/// 链接按出现顺序去重并截断到`max_links`条。
pub fn process_html(html: &str, base_url: &str, max_links: usize) -> PageContent {
    let mut document = Html::parse_document(html);

    // Links come from the untouched tree so nav menus still count
    let links = extract_links(&document, base_url, max_links);

    let excluded: Vec<_> = document.select(&EXCLUDED).map(|el| el.id()).collect();
    for id in excluded {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let root = document.root_element();
    let cleaned_html = root.html();
    let text = collapse_whitespace(root.text().collect::<Vec<_>>().join(" "));

    PageContent {
        cleaned_html,
        text,
        links,
    }
}

fn extract_links(document: &Html, base_url: &str, max_links: usize) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(_) => return Vec::new(),
    };

    let mut links = Vec::new();
    for anchor in document.select(&ANCHORS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            continue;
        }
        let resolved = resolved.to_string();
        if !links.contains(&resolved) {
            links.push(resolved);
        }
        if links.len() >= max_links {
            break;
        }
    }
    links
}

fn collapse_whitespace(text: String) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

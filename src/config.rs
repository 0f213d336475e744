//! Report configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default directory the list files are written to
const DEFAULT_OUTPUT_DIR: &str = "list";

/// Default badge service
const DEFAULT_BADGE_BASE_URL: &str = "https://img.shields.io";

/// Default base of the download links in the README table
const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://github.com/gfpcom/free-proxy-list/wiki/lists";

/// Default timeout for the badge request in seconds
const DEFAULT_BADGE_TIMEOUT_SECS: u64 = 10;

/// Where and how a report run writes its artifacts
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory receiving `<protocol>.<ext>` files and the badge
    pub output_dir: PathBuf,
    /// Document with the summary markers; `None` means `<output_dir>/../README.md`
    pub document_path: Option<PathBuf>,
    /// Badge service root, the badge is `<base>/badge/total-<N>-blue`
    pub badge_base_url: String,
    /// Download link base, a row links to `<base>/<protocol>.<ext>`
    pub download_base_url: String,
    /// Badge file name inside `output_dir`
    pub badge_file_name: String,
    /// Extension of the list files and their download links
    pub list_extension: String,
    /// Timeout for the badge request
    pub badge_timeout: Duration,
    /// Skip the badge request entirely
    pub fetch_badge: bool,
    /// User agent sent to the badge service
    pub user_agent: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            document_path: None,
            badge_base_url: DEFAULT_BADGE_BASE_URL.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            badge_file_name: "total.svg".to_string(),
            list_extension: "txt".to_string(),
            badge_timeout: Duration::from_secs(DEFAULT_BADGE_TIMEOUT_SECS),
            fetch_badge: true,
            user_agent: concat!("proxy-list/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a configuration with default paths and endpoints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    pub fn with_badge_base_url(mut self, url: String) -> Self {
        self.badge_base_url = url;
        self
    }

    pub fn with_download_base_url(mut self, url: String) -> Self {
        self.download_base_url = url;
        self
    }

    pub fn with_badge_timeout(mut self, timeout: Duration) -> Self {
        self.badge_timeout = timeout;
        self
    }

    pub fn with_fetch_badge(mut self, fetch: bool) -> Self {
        self.fetch_badge = fetch;
        self
    }

    pub fn with_list_extension(mut self, ext: String) -> Self {
        self.list_extension = ext;
        self
    }

    /// Path of the list file for `protocol`
    pub fn list_path(&self, protocol: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", protocol, self.list_extension))
    }

    /// Path of the badge image
    pub fn badge_path(&self) -> PathBuf {
        self.output_dir.join(&self.badge_file_name)
    }

    /// Document to rewrite, one directory above the output directory unless overridden
    pub fn document_path(&self) -> PathBuf {
        self.document_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join("..").join("README.md"))
    }

    /// Badge image URL for `total` proxies
    pub fn badge_url(&self, total: usize) -> String {
        format!(
            "{}/badge/total-{}-blue",
            self.badge_base_url.trim_end_matches('/'),
            total
        )
    }

    /// Download link of the list file for `protocol`
    pub fn download_url(&self, protocol: &str) -> String {
        format!(
            "{}/{}.{}",
            self.download_base_url.trim_end_matches('/'),
            protocol,
            self.list_extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("list"));
        assert_eq!(config.badge_timeout, Duration::from_secs(DEFAULT_BADGE_TIMEOUT_SECS));
        assert!(config.fetch_badge);
        assert_eq!(config.list_path("http"), Path::new("list").join("http.txt"));
        assert_eq!(config.badge_path(), Path::new("list").join("total.svg"));
        assert_eq!(
            config.document_path(),
            Path::new("list").join("..").join("README.md")
        );
    }

    #[test]
    fn test_config_urls() {
        let config = ReportConfig::default();
        assert_eq!(
            config.badge_url(1234),
            "https://img.shields.io/badge/total-1234-blue"
        );
        assert_eq!(
            config.download_url("socks5"),
            "https://github.com/gfpcom/free-proxy-list/wiki/lists/socks5.txt"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ReportConfig::new()
            .with_output_dir("/tmp/out")
            .with_document_path("/tmp/DOC.md")
            .with_badge_base_url("http://badges.local/".to_string())
            .with_download_base_url("http://dl.local".to_string())
            .with_badge_timeout(Duration::from_secs(3))
            .with_fetch_badge(false);

        assert_eq!(config.document_path(), PathBuf::from("/tmp/DOC.md"));
        assert_eq!(config.badge_url(0), "http://badges.local/badge/total-0-blue");
        assert_eq!(config.download_url("http"), "http://dl.local/http.txt");
        assert_eq!(config.badge_timeout, Duration::from_secs(3));
        assert!(!config.fetch_badge);
    }

    #[test]
    fn test_list_extension_applies_to_files_and_links() {
        let config = ReportConfig::new()
            .with_output_dir("out")
            .with_list_extension("lst".to_string());

        assert_eq!(config.list_path("socks4"), Path::new("out").join("socks4.lst"));
        assert_eq!(
            config.download_url("socks4"),
            "https://github.com/gfpcom/free-proxy-list/wiki/lists/socks4.lst"
        );
    }
}

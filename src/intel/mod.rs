//! Threat-intelligence enrichment
//!
//! Optional URL reputation lookups against VirusTotal, PhishTank, and
//! Google Safe Browsing. This is a caller-side side channel: the scan
//! engine never waits on the network, and with no API keys configured
//! every lookup is skipped and the base verdict stands unaided.
//!
//! Each source failure is logged and degrades gracefully to "no signal".

use crate::config::IntelConfig;
use crate::models::{RiskLevel, Verdict};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Request timeout for each lookup
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-source confidence boosts on a confirmed threat
const VIRUSTOTAL_BOOST: f64 = 0.3;
const PHISHTANK_BOOST: f64 = 0.4;
const SAFE_BROWSING_BOOST: f64 = 0.3;

/// URL reputation from a single source
#[derive(Debug, Clone, Serialize)]
pub struct UrlReputation {
    pub reputation: String,
    pub detections: u32,
    pub total_scans: u32,
    pub source: String,
}

/// PhishTank database hit
#[derive(Debug, Clone, Serialize)]
pub struct PhishingRecord {
    pub is_phishing: bool,
    pub verified: bool,
    pub source: String,
}

/// Safe Browsing threat match
#[derive(Debug, Clone, Serialize)]
pub struct SafetyRecord {
    pub is_unsafe: bool,
    pub threat_types: Vec<String>,
    pub source: String,
}

/// Combined result across all configured sources
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntelSummary {
    pub threat_detected: bool,
    pub sources: Vec<String>,
    pub confidence_boost: f64,
}

impl IntelSummary {
    /// Merge this summary into a base verdict.
    ///
    /// Boosting is one-directional: confidence can only go up (capped at
    /// 1.0), and a detected threat forces the fraud flag.
    pub fn apply(&self, verdict: Verdict) -> Verdict {
        if self.sources.is_empty() {
            return verdict;
        }
        let confidence = (verdict.confidence + self.confidence_boost).min(1.0);
        Verdict {
            is_fraud: verdict.is_fraud || self.threat_detected,
            confidence: crate::models::round4(confidence),
            risk_level: RiskLevel::from_confidence(confidence),
            ..verdict
        }
    }
}

#[derive(Deserialize)]
struct VirusTotalResponse {
    #[serde(default)]
    positives: u32,
    #[serde(default)]
    total: u32,
}

#[derive(Deserialize)]
struct PhishTankResponse {
    #[serde(default)]
    results: PhishTankResults,
}

#[derive(Deserialize, Default)]
struct PhishTankResults {
    #[serde(default)]
    in_database: bool,
    #[serde(default)]
    verified: bool,
}

#[derive(Serialize)]
struct SafeBrowsingQuery {
    client: SafeBrowsingClient,
    #[serde(rename = "threatInfo")]
    threat_info: SafeBrowsingThreatInfo,
}

#[derive(Serialize)]
struct SafeBrowsingClient {
    #[serde(rename = "clientId")]
    client_id: String,
    #[serde(rename = "clientVersion")]
    client_version: String,
}

#[derive(Serialize)]
struct SafeBrowsingThreatInfo {
    #[serde(rename = "threatTypes")]
    threat_types: Vec<String>,
    #[serde(rename = "platformTypes")]
    platform_types: Vec<String>,
    #[serde(rename = "threatEntryTypes")]
    threat_entry_types: Vec<String>,
    #[serde(rename = "threatEntries")]
    threat_entries: Vec<SafeBrowsingEntry>,
}

#[derive(Serialize)]
struct SafeBrowsingEntry {
    url: String,
}

#[derive(Deserialize)]
struct SafeBrowsingResponse {
    #[serde(default)]
    matches: Vec<SafeBrowsingMatch>,
}

#[derive(Deserialize)]
struct SafeBrowsingMatch {
    #[serde(rename = "threatType")]
    threat_type: Option<String>,
}

/// Client for the configured threat-intelligence sources
pub struct ThreatIntel {
    virustotal_api_key: Option<String>,
    phishtank_api_key: Option<String>,
    safe_browsing_api_key: Option<String>,
    agent: ureq::Agent,
}

impl ThreatIntel {
    /// Build a client from the intel section of the user config
    pub fn from_config(config: &IntelConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(LOOKUP_TIMEOUT))
            .build()
            .new_agent();

        Self {
            virustotal_api_key: config.virustotal_api_key.clone(),
            phishtank_api_key: config.phishtank_api_key.clone(),
            safe_browsing_api_key: config.safe_browsing_api_key.clone(),
            agent,
        }
    }

    /// Whether at least one source has an API key
    pub fn enabled(&self) -> bool {
        self.virustotal_api_key.is_some()
            || self.phishtank_api_key.is_some()
            || self.safe_browsing_api_key.is_some()
    }

    /// Check URL reputation against VirusTotal
    pub fn check_url_reputation(&self, url: &str) -> Option<UrlReputation> {
        let api_key = self.virustotal_api_key.as_deref()?;

        let result = self
            .agent
            .post("https://www.virustotal.com/vtapi/v2/url/scan")
            .send_form([("url", url), ("apikey", api_key)]);

        match result {
            Ok(response) => {
                let text = response.into_body().read_to_string().ok()?;
                let data: VirusTotalResponse = serde_json::from_str(&text).ok()?;
                Some(UrlReputation {
                    reputation: if data.positives > 0 {
                        "malicious".to_string()
                    } else {
                        "clean".to_string()
                    },
                    detections: data.positives,
                    total_scans: data.total,
                    source: "virustotal".to_string(),
                })
            }
            Err(e) => {
                warn!("VirusTotal API request failed: {}", e);
                None
            }
        }
    }

    /// Check a URL against the PhishTank database
    pub fn check_phishing_url(&self, url: &str) -> Option<PhishingRecord> {
        let api_key = self.phishtank_api_key.as_deref()?;

        let result = self
            .agent
            .post("http://checkurl.phishtank.com/checkurl/")
            .send_form([("url", url), ("format", "json"), ("app_key", api_key)]);

        match result {
            Ok(response) => {
                let text = response.into_body().read_to_string().ok()?;
                let data: PhishTankResponse = serde_json::from_str(&text).ok()?;
                if data.results.in_database {
                    Some(PhishingRecord {
                        is_phishing: true,
                        verified: data.results.verified,
                        source: "phishtank".to_string(),
                    })
                } else {
                    None
                }
            }
            Err(e) => {
                warn!("PhishTank API request failed: {}", e);
                None
            }
        }
    }

    /// Check a URL against Google Safe Browsing v4
    pub fn check_google_safe_browsing(&self, url: &str) -> Option<SafetyRecord> {
        let api_key = self.safe_browsing_api_key.as_deref()?;

        let query = SafeBrowsingQuery {
            client: SafeBrowsingClient {
                client_id: "scamscan".to_string(),
                client_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            threat_info: SafeBrowsingThreatInfo {
                threat_types: vec!["MALWARE".to_string(), "SOCIAL_ENGINEERING".to_string()],
                platform_types: vec!["ANY_PLATFORM".to_string()],
                threat_entry_types: vec!["URL".to_string()],
                threat_entries: vec![SafeBrowsingEntry {
                    url: url.to_string(),
                }],
            },
        };

        let endpoint =
            format!("https://safebrowsing.googleapis.com/v4/threatMatches:find?key={api_key}");
        let result = self
            .agent
            .post(endpoint.as_str())
            .header("Content-Type", "application/json")
            .send_json(&query);

        match result {
            Ok(response) => {
                let text = response.into_body().read_to_string().ok()?;
                let data: SafeBrowsingResponse = serde_json::from_str(&text).ok()?;
                if data.matches.is_empty() {
                    None
                } else {
                    Some(SafetyRecord {
                        is_unsafe: true,
                        threat_types: data
                            .matches
                            .into_iter()
                            .filter_map(|m| m.threat_type)
                            .collect(),
                        source: "google_safe_browsing".to_string(),
                    })
                }
            }
            Err(e) => {
                warn!("Google Safe Browsing API request failed: {}", e);
                None
            }
        }
    }

    /// Check a URL against every configured source and combine the
    /// results into a single boost.
    pub fn enhanced_url_check(&self, url: &str) -> IntelSummary {
        let mut summary = IntelSummary::default();

        if let Some(vt) = self.check_url_reputation(url) {
            summary.sources.push(vt.source.clone());
            if vt.reputation == "malicious" {
                summary.threat_detected = true;
                summary.confidence_boost += VIRUSTOTAL_BOOST;
            }
        }

        if let Some(pt) = self.check_phishing_url(url) {
            summary.sources.push(pt.source.clone());
            if pt.is_phishing {
                summary.threat_detected = true;
                summary.confidence_boost += PHISHTANK_BOOST;
            }
        }

        if let Some(gsb) = self.check_google_safe_browsing(url) {
            summary.sources.push(gsb.source.clone());
            if gsb.is_unsafe {
                summary.threat_detected = true;
                summary.confidence_boost += SAFE_BROWSING_BOOST;
            }
        }

        summary
    }
}

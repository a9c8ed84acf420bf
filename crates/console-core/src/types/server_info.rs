//! Server and cluster metadata as reported by the admin API.
//!
//! Field names follow the admin API's JSON encoding, which mixes
//! camelCase and lowercase keys.

use serde::{Deserialize, Serialize};

/// Cluster-wide information returned by the admin `info` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Deployment mode reported by the cluster.
    #[serde(default)]
    pub mode: String,
    /// Unique deployment identifier.
    #[serde(rename = "deploymentID", default)]
    pub deployment_id: String,
    /// Bucket statistics.
    #[serde(default)]
    pub buckets: Count,
    /// Object statistics.
    #[serde(default)]
    pub objects: Count,
    /// Capacity usage.
    #[serde(default)]
    pub usage: Usage,
    /// Per-server properties.
    #[serde(default)]
    pub servers: Vec<ServerProperties>,
}

/// A simple counter wrapper (`{"count": n}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    #[serde(default)]
    pub count: u64,
}

/// Capacity usage (`{"size": bytes}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub size: u64,
}

/// A single server in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerProperties {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub version: String,
    /// 1-based index of the server pool this server belongs to.
    #[serde(rename = "poolNumber", default)]
    pub pool_number: u32,
    #[serde(default)]
    pub drives: Vec<Drive>,
}

/// A single drive attached to a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(default)]
    pub endpoint: String,
    #[serde(rename = "totalspace", default)]
    pub total_space: u64,
    #[serde(rename = "usedspace", default)]
    pub used_space: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_admin_info_payload() {
        let payload = serde_json::json!({
            "mode": "online",
            "deploymentID": "6faeded5-5cf3-4133-8a37-07c5d500207c",
            "buckets": {"count": 4},
            "objects": {"count": 120},
            "usage": {"size": 2048},
            "servers": [{
                "state": "online",
                "endpoint": "node1:9000",
                "version": "2023-01-01T00-00-00Z",
                "poolNumber": 1,
                "drives": [{"endpoint": "/data1", "totalspace": 100, "usedspace": 40}]
            }]
        });

        let info: ServerInfo = serde_json::from_value(payload).unwrap();
        assert_eq!(info.deployment_id, "6faeded5-5cf3-4133-8a37-07c5d500207c");
        assert_eq!(info.buckets.count, 4);
        assert_eq!(info.servers[0].pool_number, 1);
        assert_eq!(info.servers[0].drives[0].used_space, 40);
    }

    #[test]
    fn test_missing_sections_default() {
        let info: ServerInfo = serde_json::from_str("{}").unwrap();
        assert!(info.servers.is_empty());
        assert_eq!(info.usage.size, 0);
    }
}

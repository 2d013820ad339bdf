use serde::{Deserialize, Serialize};

/// Outcome of a CI build or pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Success,
    Failure,
    Building,
}

impl BuildStatus {
    pub fn label(self) -> &'static str {
        match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::Building => "BUILDING",
        }
    }

    /// Status glyph used in build lists and the stage strip
    pub fn symbol(self) -> char {
        match self {
            BuildStatus::Success => '\u{2714}',
            BuildStatus::Failure => '\u{2718}',
            BuildStatus::Building => '\u{25F7}',
        }
    }
}

/// The most recent build of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastBuild {
    pub number: u32,
    pub status: BuildStatus,
    /// RFC 3339 start time
    pub timestamp: String,
    pub duration: String,
    pub commit_hash: String,
    pub branch: String,
}

/// One row of the build history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRun {
    pub number: u32,
    pub status: BuildStatus,
    pub duration: String,
    /// Wall-clock start, `HH:MM`
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub name: String,
    pub status: BuildStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JenkinsInfo {
    pub last_build: LastBuild,
    /// Newest first
    pub builds: Vec<BuildRun>,
    /// Stages of the deploy pipeline in execution order
    pub stages: Vec<PipelineStage>,
}

/// Run state shared by containers, the host instance and monitoring services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RunState::Running => "Running",
            RunState::Stopped => "Stopped",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            RunState::Running => '\u{2714}',
            RunState::Stopped => '\u{2718}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub status: RunState,
    pub image: String,
    /// Host-to-container port mapping, e.g. `3002:3000`
    pub ports: String,
    pub uptime: String,
}

/// Daemon-wide counts. These cover every container, not only the listed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStats {
    pub total: u32,
    pub running: u32,
    pub stopped: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerInfo {
    pub containers: Vec<Container>,
    pub stats: ContainerStats,
}

/// The EC2 instance the stack runs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ec2Instance {
    pub instance_id: String,
    pub instance_type: String,
    pub region: String,
    pub status: RunState,
    pub uptime: String,
    pub public_ip: String,
    pub private_ip: String,
}

/// Network throughput in MB/s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkTraffic {
    #[serde(rename = "in")]
    pub inbound: f64,
    #[serde(rename = "out")]
    pub outbound: f64,
}

/// Host utilization. `cpu`, `memory` and `disk` are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    pub network: NetworkTraffic,
}

impl Metrics {
    /// Labelled percentages in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("CPU Usage", self.cpu),
            ("Memory Usage", self.memory),
            ("Disk Usage", self.disk),
        ]
    }
}

/// Capacity figures in GB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub total_ram_gb: f64,
    pub available_ram_gb: f64,
    pub total_storage_gb: f64,
    pub available_storage_gb: f64,
}

impl ResourceAllocation {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Total RAM", self.total_ram_gb),
            ("Available RAM", self.available_ram_gb),
            ("Total Storage", self.total_storage_gb),
            ("Available Storage", self.available_storage_gb),
        ]
    }
}

/// A monitoring tool exposed on the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringService {
    pub name: String,
    pub port: u16,
    pub status: RunState,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Warning => "WARN",
            AlertKind::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: String,
}

/// Everything the infrastructure dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraSnapshot {
    pub jenkins: JenkinsInfo,
    pub docker: DockerInfo,
    pub ec2: Ec2Instance,
    pub metrics: Metrics,
    pub alerts: Vec<Alert>,
    pub services: Vec<MonitoringService>,
    pub allocation: ResourceAllocation,
}

impl InfraSnapshot {
    /// Placeholder values standing in for Jenkins, Docker, EC2 and Prometheus
    pub fn mock() -> Self {
        let run = |number, status, duration: &str, timestamp: &str| BuildRun {
            number,
            status,
            duration: duration.to_string(),
            timestamp: timestamp.to_string(),
        };
        let stage = |name: &str| PipelineStage {
            name: name.to_string(),
            status: BuildStatus::Success,
        };
        let container = |name: &str, image: &str, ports: &str, uptime: &str| Container {
            name: name.to_string(),
            status: RunState::Running,
            image: image.to_string(),
            ports: ports.to_string(),
            uptime: uptime.to_string(),
        };
        let service = |name: &str, port: u16| MonitoringService {
            name: name.to_string(),
            port,
            status: RunState::Running,
            url: format!("http://localhost:{}", port),
        };
        let alert = |kind, message: &str, timestamp: &str| Alert {
            kind,
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        };

        InfraSnapshot {
            jenkins: JenkinsInfo {
                last_build: LastBuild {
                    number: 45,
                    status: BuildStatus::Success,
                    timestamp: "2025-05-24T10:30:00Z".to_string(),
                    duration: "2m 34s".to_string(),
                    commit_hash: "a7b3c2d".to_string(),
                    branch: "main".to_string(),
                },
                builds: vec![
                    run(45, BuildStatus::Success, "2m 34s", "10:30"),
                    run(44, BuildStatus::Success, "2m 12s", "09:15"),
                    run(43, BuildStatus::Failure, "1m 45s", "08:45"),
                    run(42, BuildStatus::Success, "2m 28s", "08:20"),
                ],
                stages: vec![
                    stage("Clone"),
                    stage("Build Docker Image"),
                    stage("Push to Docker Hub"),
                    stage("Deploy Container"),
                ],
            },
            docker: DockerInfo {
                containers: vec![
                    container(
                        "auto-infra-container",
                        "ashutosh1201/auto-infra-dashboard:10",
                        "3002:3000",
                        "2d 5h",
                    ),
                    container("prometheus", "prom/prometheus", "9090:9090", "5d 12h"),
                    container("grafana", "grafana/grafana", "3010:3000", "5d 12h"),
                    container(
                        "cadvisor",
                        "gcr.io/cadvisor/cadvisor:v0.47.2",
                        "8081:8080",
                        "5d 12h",
                    ),
                ],
                stats: ContainerStats {
                    total: 6,
                    running: 5,
                    stopped: 1,
                },
            },
            ec2: Ec2Instance {
                instance_id: "i-0abcdef1234567890".to_string(),
                instance_type: "t3.medium".to_string(),
                region: "us-east-1".to_string(),
                status: RunState::Running,
                uptime: "7d 14h".to_string(),
                public_ip: "54.123.456.789".to_string(),
                private_ip: "10.0.1.123".to_string(),
            },
            metrics: Metrics {
                cpu: 45.2,
                memory: 68.7,
                disk: 32.1,
                network: NetworkTraffic {
                    inbound: 1.2,
                    outbound: 0.8,
                },
            },
            alerts: vec![
                alert(AlertKind::Warning, "High memory usage detected (>80%)", "10:45 AM"),
                alert(AlertKind::Info, "New deployment completed successfully", "10:30 AM"),
            ],
            services: vec![
                service("Grafana", 3010),
                service("Prometheus", 9090),
                service("cAdvisor", 8081),
                service("Graphite", 80),
            ],
            allocation: ResourceAllocation {
                total_ram_gb: 4.0,
                available_ram_gb: 1.2,
                total_storage_gb: 50.0,
                available_storage_gb: 34.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_snapshot_is_consistent() {
        let snap = InfraSnapshot::mock();
        let last = &snap.jenkins.last_build;
        assert_eq!(last.number, 45);
        assert_eq!(last.commit_hash, "a7b3c2d");
        assert_eq!(snap.jenkins.builds[0].number, last.number);
        assert_eq!(snap.jenkins.builds[0].duration, last.duration);
        let numbers: Vec<u32> = snap.jenkins.builds.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![45, 44, 43, 42]);

        let stats = snap.docker.stats;
        assert_eq!((stats.running, stats.total), (5, 6));
        assert_eq!(stats.running + stats.stopped, stats.total);
        assert_eq!(snap.docker.containers.len(), 4);
        assert_eq!(snap.docker.containers[0].ports, "3002:3000");

        assert_eq!(snap.ec2.instance_id, "i-0abcdef1234567890");
        assert_eq!(snap.metrics.network.inbound, 1.2);
        for (_, value) in snap.metrics.entries() {
            assert!((0.0..=100.0).contains(&value));
        }
        assert_eq!(snap.alerts.len(), 2);
    }

    #[test]
    fn pipeline_stages_in_order() {
        let names: Vec<String> = InfraSnapshot::mock()
            .jenkins
            .stages
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec!["Clone", "Build Docker Image", "Push to Docker Hub", "Deploy Container"]
        );
    }

    #[test]
    fn snapshot_serializes_with_lowercase_enums() {
        let json = serde_json::to_value(InfraSnapshot::mock()).unwrap();
        assert_eq!(json["jenkins"]["last_build"]["status"], "success");
        assert_eq!(json["jenkins"]["builds"][2]["status"], "failure");
        assert_eq!(json["docker"]["containers"][1]["status"], "running");
        assert_eq!(json["alerts"][0]["type"], "warning");
        assert_eq!(json["metrics"]["network"]["in"], 1.2);
    }
}

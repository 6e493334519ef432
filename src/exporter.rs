use crate::types::{ContainerMetric, Snapshot};

const STATE_HELP: &str = "# HELP container_state Container state (0=exited, 1=running, 2=paused, 3=created, 4=restarting, 5=dead, 6=unknown)";
const HEALTH_HELP: &str = "# HELP container_health Container health status (0=none, 1=healthy, 2=unhealthy, 3=starting)";
const RESTART_HELP: &str = "# HELP container_restart_count Number of times the container has been restarted";
const UP_HELP: &str = "# HELP portainer_exporter_up Whether the exporter is up and connected to Portainer";
const TIMESTAMP_HELP: &str = "# HELP portainer_exporter_last_scrape_timestamp Unix timestamp of last successful scrape";

/// Render a snapshot in the Prometheus text exposition format (version 0.0.4).
///
/// Labels are written verbatim; values containing `"` or `\` are not escaped.
pub fn render(snapshot: &Snapshot) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_gauge_family(&mut lines, STATE_HELP, "container_state", &snapshot.metrics, |m| m.state.to_string());
    lines.push(String::new());
    push_gauge_family(&mut lines, HEALTH_HELP, "container_health", &snapshot.metrics, |m| m.health.to_string());
    lines.push(String::new());
    push_gauge_family(&mut lines, RESTART_HELP, "container_restart_count", &snapshot.metrics, |m| {
        m.restart_count.to_string()
    });
    lines.push(String::new());

    lines.push(UP_HELP.to_string());
    lines.push("# TYPE portainer_exporter_up gauge".to_string());
    lines.push(format!("portainer_exporter_up {}", if snapshot.is_up() { 1 } else { 0 }));
    lines.push(String::new());

    lines.push(TIMESTAMP_HELP.to_string());
    lines.push("# TYPE portainer_exporter_last_scrape_timestamp gauge".to_string());
    lines.push(format!(
        "portainer_exporter_last_scrape_timestamp {}",
        snapshot.last_update.trunc() as i64
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_gauge_family<F>(lines: &mut Vec<String>, help: &str, name: &str, metrics: &[ContainerMetric], value: F)
where
    F: Fn(&ContainerMetric) -> String,
{
    lines.push(help.to_string());
    lines.push(format!("# TYPE {} gauge", name));
    for m in metrics {
        lines.push(format!("{}{{{}}} {}", name, labels(m), value(m)));
    }
}

fn labels(m: &ContainerMetric) -> String {
    format!(
        "container_name=\"{}\",hostname=\"{}\",image=\"{}\"",
        m.name,
        m.hostname.to_lowercase(),
        m.image
    )
}

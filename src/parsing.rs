/// Docker container lifecycle states as exported gauge values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Exited = 0,
    Running = 1,
    Paused = 2,
    Created = 3,
    Restarting = 4,
    Dead = 5,
    Unknown = 6,
}

impl ContainerState {
    pub fn from_docker(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "exited" => ContainerState::Exited,
            "created" => ContainerState::Created,
            "restarting" => ContainerState::Restarting,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Docker health check results as exported gauge values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    None = 0,
    Healthy = 1,
    Unhealthy = 2,
    Starting = 3,
}

impl HealthStatus {
    pub fn from_label(health: &str) -> Self {
        match health.to_lowercase().as_str() {
            "healthy" => HealthStatus::Healthy,
            "unhealthy" => HealthStatus::Unhealthy,
            "starting" => HealthStatus::Starting,
            _ => HealthStatus::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::None => "none",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Starting => "starting",
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }
}

pub fn state_code(state: &str) -> i64 {
    ContainerState::from_docker(state).code()
}

pub fn health_code(health: &str) -> i64 {
    HealthStatus::from_label(health).code()
}

/// Extracts the health label from a Docker status line such as `Up 2 hours (healthy)`.
pub fn parse_health_label(status: &str) -> &'static str {
    let status = status.to_lowercase();
    // "unhealthy" contains "healthy", so it has to be checked first
    let health = if status.contains("unhealthy") {
        HealthStatus::Unhealthy
    } else if status.contains("healthy") {
        HealthStatus::Healthy
    } else if status.contains("starting") {
        HealthStatus::Starting
    } else {
        HealthStatus::None
    };
    health.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_code() {
        assert_eq!(state_code("running"), 1);
        assert_eq!(state_code("paused"), 2);
        assert_eq!(state_code("exited"), 0);
        assert_eq!(state_code("created"), 3);
        assert_eq!(state_code("restarting"), 4);
        assert_eq!(state_code("dead"), 5);

        // Case-insensitive
        assert_eq!(state_code("RUNNING"), 1);
        assert_eq!(state_code("RuNnInG"), 1);

        // Anything else is unknown
        assert_eq!(state_code("unknown"), 6);
        assert_eq!(state_code("removing"), 6);
        assert_eq!(state_code(""), 6);
        assert_eq!(state_code(" running"), 6);
    }

    #[test]
    fn test_state_code_round_trips_table() {
        for state in [
            ContainerState::Exited,
            ContainerState::Running,
            ContainerState::Paused,
            ContainerState::Created,
            ContainerState::Restarting,
            ContainerState::Dead,
        ] {
            let name = format!("{:?}", state).to_lowercase();
            assert_eq!(state_code(&name), state.code());
        }
    }

    #[test]
    fn test_health_code() {
        assert_eq!(health_code("healthy"), 1);
        assert_eq!(health_code("unhealthy"), 2);
        assert_eq!(health_code("starting"), 3);
        assert_eq!(health_code("none"), 0);

        assert_eq!(health_code("HEALTHY"), 1);
        assert_eq!(health_code("HeAlThY"), 1);

        assert_eq!(health_code("unknown"), 0);
        assert_eq!(health_code(""), 0);
        assert_eq!(health_code("health: starting"), 0);
    }

    #[test]
    fn test_parse_health_label() {
        assert_eq!(parse_health_label("Up 2 hours (healthy)"), "healthy");
        assert_eq!(parse_health_label("Up 5 days (unhealthy)"), "unhealthy");
        assert_eq!(parse_health_label("Up 10 seconds (health: starting)"), "starting");
        assert_eq!(parse_health_label("Up 2 days"), "none");
        assert_eq!(parse_health_label("Exited (0) 2 days ago"), "none");
        assert_eq!(parse_health_label(""), "none");
    }

    #[test]
    fn test_parse_health_label_case_insensitive() {
        assert_eq!(parse_health_label("Up 2 hours (HEALTHY)"), "healthy");
        assert_eq!(parse_health_label("Up 2 hours (Unhealthy)"), "unhealthy");
        // Must not be caught by the "healthy" substring first
        assert_eq!(parse_health_label("container is (UNHEALTHY) again"), "unhealthy");
    }

    #[test]
    fn test_label_feeds_health_code() {
        assert_eq!(health_code(parse_health_label("Up 1 hour (healthy)")), 1);
        assert_eq!(health_code(parse_health_label("Up 1 hour (unhealthy)")), 2);
        assert_eq!(health_code(parse_health_label("Up 3 seconds (health: starting)")), 3);
        assert_eq!(health_code(parse_health_label("Created")), 0);
    }
}

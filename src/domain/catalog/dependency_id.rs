//! Closed set of dependency identifiers that influence generated output.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::catalog::coordinate::Coordinate;

/// A dependency identifier the generator knows how to render.
///
/// Variants are declared in manifest order: resolved dependencies always
/// appear in generated build files in this order, whatever the order of the
/// service's dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DependencyId {
    Web,
    Webflux,
    DataJpa,
    Mysql,
    Postgresql,
    H2,
    Security,
    Actuator,
    Eureka,
    ConfigClient,
    Gateway,
    ConfigServer,
    EurekaServer,
}

impl DependencyId {
    pub const ALL: [DependencyId; 13] = [
        DependencyId::Web,
        DependencyId::Webflux,
        DependencyId::DataJpa,
        DependencyId::Mysql,
        DependencyId::Postgresql,
        DependencyId::H2,
        DependencyId::Security,
        DependencyId::Actuator,
        DependencyId::Eureka,
        DependencyId::ConfigClient,
        DependencyId::Gateway,
        DependencyId::ConfigServer,
        DependencyId::EurekaServer,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DependencyId::Web => "web",
            DependencyId::Webflux => "webflux",
            DependencyId::DataJpa => "data-jpa",
            DependencyId::Mysql => "mysql",
            DependencyId::Postgresql => "postgresql",
            DependencyId::H2 => "h2",
            DependencyId::Security => "security",
            DependencyId::Actuator => "actuator",
            DependencyId::Eureka => "eureka",
            DependencyId::ConfigClient => "config-client",
            DependencyId::Gateway => "gateway",
            DependencyId::ConfigServer => "config-server",
            DependencyId::EurekaServer => "eureka-server",
        }
    }

    /// Parse an identifier; anything unrecognized has no effect on output.
    pub fn from_id(id: &str) -> Option<DependencyId> {
        DependencyId::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Manifest coordinates, if this identifier contributes a dependency line.
    pub fn coordinate(&self) -> Option<Coordinate> {
        const BOOT: &str = "org.springframework.boot";
        const CLOUD: &str = "org.springframework.cloud";
        let coordinate = match self {
            DependencyId::Web => Coordinate::compile(BOOT, "spring-boot-starter-web"),
            DependencyId::Webflux => Coordinate::compile(BOOT, "spring-boot-starter-webflux"),
            DependencyId::DataJpa => Coordinate::compile(BOOT, "spring-boot-starter-data-jpa"),
            DependencyId::Mysql => Coordinate::runtime("com.mysql", "mysql-connector-j"),
            DependencyId::Postgresql => Coordinate::runtime("org.postgresql", "postgresql"),
            DependencyId::H2 => Coordinate::runtime("com.h2database", "h2"),
            DependencyId::Security => Coordinate::compile(BOOT, "spring-boot-starter-security"),
            DependencyId::Actuator => Coordinate::compile(BOOT, "spring-boot-starter-actuator"),
            DependencyId::Eureka => {
                Coordinate::compile(CLOUD, "spring-cloud-starter-netflix-eureka-client")
            }
            DependencyId::ConfigClient => Coordinate::compile(CLOUD, "spring-cloud-starter-config"),
            DependencyId::Gateway | DependencyId::ConfigServer | DependencyId::EurekaServer => {
                return None;
            }
        };
        Some(coordinate)
    }

    /// Whether this identifier pulls in the Spring Cloud BOM.
    pub fn is_cloud(&self) -> bool {
        matches!(
            self,
            DependencyId::Eureka
                | DependencyId::ConfigClient
                | DependencyId::Gateway
                | DependencyId::ConfigServer
                | DependencyId::EurekaServer
        )
    }

    /// Whether this identifier is a JDBC driver that can back the datasource.
    pub fn is_datastore_driver(&self) -> bool {
        matches!(self, DependencyId::H2 | DependencyId::Mysql | DependencyId::Postgresql)
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Datasource drivers in selection priority: the embedded database wins.
const DRIVER_PRIORITY: [DependencyId; 3] =
    [DependencyId::H2, DependencyId::Mysql, DependencyId::Postgresql];

/// The recognized dependencies of one service, as a membership set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(BTreeSet<DependencyId>);

impl DependencySet {
    /// Build from raw identifiers; duplicates collapse and unknown ids drop out.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        Self(ids.iter().filter_map(|id| DependencyId::from_id(id.as_ref())).collect())
    }

    pub fn contains(&self, id: DependencyId) -> bool {
        self.0.contains(&id)
    }

    /// Coordinates of every member that contributes a manifest line, in manifest order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.0.iter().filter_map(DependencyId::coordinate)
    }

    pub fn needs_cloud_bom(&self) -> bool {
        self.0.iter().any(DependencyId::is_cloud)
    }

    /// Driver whose connection settings go into the properties file.
    ///
    /// Only selected when the persistence starter is present; at most one
    /// driver is ever chosen.
    pub fn datasource_driver(&self) -> Option<DependencyId> {
        if !self.contains(DependencyId::DataJpa) {
            return None;
        }
        self.0
            .iter()
            .copied()
            .filter(DependencyId::is_datastore_driver)
            .min_by_key(|driver| DRIVER_PRIORITY.iter().position(|p| p == driver))
    }
}

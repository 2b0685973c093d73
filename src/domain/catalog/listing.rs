//! Browsable dependency catalog: display metadata for every selectable identifier.

use std::fmt;

use crate::domain::catalog::DependencyId;

/// Category a selectable dependency is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    Web,
    Sql,
    NoSql,
    Cloud,
    Messaging,
    Security,
    Observability,
    Testing,
}

impl DependencyGroup {
    pub const ALL: [DependencyGroup; 8] = [
        DependencyGroup::Web,
        DependencyGroup::Sql,
        DependencyGroup::NoSql,
        DependencyGroup::Cloud,
        DependencyGroup::Messaging,
        DependencyGroup::Security,
        DependencyGroup::Observability,
        DependencyGroup::Testing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DependencyGroup::Web => "Web",
            DependencyGroup::Sql => "SQL",
            DependencyGroup::NoSql => "NoSQL",
            DependencyGroup::Cloud => "Cloud",
            DependencyGroup::Messaging => "Messaging",
            DependencyGroup::Security => "Security",
            DependencyGroup::Observability => "Observability",
            DependencyGroup::Testing => "Testing",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<DependencyGroup> {
        DependencyGroup::ALL.into_iter().find(|g| g.display_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One selectable dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub group: DependencyGroup,
}

impl CatalogEntry {
    /// Whether selecting this entry changes generated output.
    pub fn affects_output(&self) -> bool {
        DependencyId::from_id(self.id).is_some()
    }
}

const fn entry(
    group: DependencyGroup,
    id: &'static str,
    name: &'static str,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry { id, name, description, group }
}

use DependencyGroup::*;

static ENTRIES: &[CatalogEntry] = &[
    entry(Web, "web", "Spring Web", "Build web applications using Spring MVC"),
    entry(Web, "webflux", "Spring Reactive Web", "Build reactive web applications with Spring WebFlux"),
    entry(Web, "graphql", "Spring GraphQL", "Build GraphQL applications with Spring for GraphQL"),
    entry(Web, "websocket", "WebSocket", "Build WebSocket applications with SockJS and STOMP"),
    entry(Web, "hateoas", "Spring HATEOAS", "Build hypermedia-driven REST web services"),
    entry(Sql, "data-jpa", "Spring Data JPA", "Persist data in SQL stores with Java Persistence API"),
    entry(Sql, "mysql", "MySQL Driver", "MySQL JDBC driver"),
    entry(Sql, "postgresql", "PostgreSQL Driver", "PostgreSQL JDBC driver"),
    entry(Sql, "h2", "H2 Database", "H2 database (with embedded support)"),
    entry(Sql, "liquibase", "Liquibase Migration", "Liquibase database migration and version control"),
    entry(NoSql, "data-mongodb", "Spring Data MongoDB", "Store data in MongoDB document database"),
    entry(NoSql, "data-redis", "Spring Data Redis", "Access Redis key-value data stores"),
    entry(NoSql, "data-elasticsearch", "Spring Data Elasticsearch", "Store and search data with Elasticsearch"),
    entry(NoSql, "data-cassandra", "Spring Data Cassandra", "Access Cassandra distributed database"),
    entry(Cloud, "eureka", "Eureka Discovery Client", "Client that connects to Eureka for service discovery"),
    entry(Cloud, "config-client", "Config Client", "Client for Spring Cloud Config Server"),
    entry(Cloud, "gateway", "Gateway", "Provides routing and filtering capabilities"),
    entry(Cloud, "config-server", "Config Server", "Central configuration server for distributed systems"),
    entry(Cloud, "eureka-server", "Eureka Server", "Registry server for service discovery"),
    entry(Messaging, "kafka", "Spring for Apache Kafka", "Publish and subscribe to Apache Kafka topics"),
    entry(Messaging, "amqp", "Spring for RabbitMQ", "Message broker using the Advanced Message Queuing Protocol"),
    entry(Security, "security", "Spring Security", "Highly customizable authentication and access-control"),
    entry(Security, "oauth2-client", "OAuth2 Client", "OAuth2/OpenID Connect client features"),
    entry(Security, "oauth2-resource-server", "OAuth2 Resource Server", "OAuth2 resource server features"),
    entry(Observability, "actuator", "Spring Boot Actuator", "Supports built-in or custom endpoints for monitoring and management"),
    entry(Observability, "prometheus", "Prometheus", "Expose metrics in Prometheus format"),
    entry(Observability, "zipkin", "Zipkin Client", "Report trace data to Zipkin"),
    entry(Testing, "test", "Spring Boot Test", "Testing utility with JUnit Jupiter, Hamcrest and Mockito"),
    entry(Testing, "testcontainers", "Testcontainers", "Provide lightweight, throwaway instances of databases, message brokers, etc."),
];

/// Every selectable dependency, grouped in display order.
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

pub fn entries_in_group(group: DependencyGroup) -> impl Iterator<Item = &'static CatalogEntry> {
    ENTRIES.iter().filter(move |e| e.group == group)
}

pub fn lookup(id: &str) -> Option<&'static CatalogEntry> {
    ENTRIES.iter().find(|e| e.id == id)
}

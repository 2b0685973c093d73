//! `application.properties` renderer.

use crate::domain::catalog::{DependencyId, DependencySet};
use crate::domain::service::ServiceConfig;

pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const EUREKA_DEFAULT_ZONE: &str = "http://localhost:8761/eureka/";
pub const CONFIG_SERVER_URL: &str = "http://localhost:8888";

pub fn render_properties(config: &ServiceConfig) -> String {
    let deps = DependencySet::from_ids(&config.dependencies);
    let mut properties =
        format!("spring.application.name={}\nserver.port={DEFAULT_SERVER_PORT}\n", config.name);

    if let Some(driver) = deps.datasource_driver() {
        properties.push_str(&datasource_block(driver, &database_name(&config.name)));
    }

    if deps.contains(DependencyId::Eureka) {
        properties.push_str(&format!(
            "\n# Eureka Client Configuration\neureka.client.service-url.defaultZone={EUREKA_DEFAULT_ZONE}\neureka.instance.prefer-ip-address=true\n"
        ));
    }

    if deps.contains(DependencyId::ConfigClient) {
        properties.push_str(&format!(
            "\n# Config Client Configuration\nspring.config.import=optional:configserver:{CONFIG_SERVER_URL}\n"
        ));
    }

    properties
}

/// Database name derived from the service name with hyphens stripped.
fn database_name(service_name: &str) -> String {
    service_name.replace('-', "")
}

fn datasource_block(driver: DependencyId, db: &str) -> String {
    match driver {
        DependencyId::H2 => format!(
            "\n# H2 Database Configuration\nspring.datasource.url=jdbc:h2:mem:{db}\nspring.datasource.driverClassName=org.h2.Driver\nspring.datasource.username=sa\nspring.datasource.password=\nspring.jpa.database-platform=org.hibernate.dialect.H2Dialect\nspring.h2.console.enabled=true\n"
        ),
        DependencyId::Mysql => format!(
            "\n# MySQL Database Configuration\nspring.datasource.url=jdbc:mysql://localhost:3306/{db}\nspring.datasource.username=root\nspring.datasource.password=\nspring.datasource.driver-class-name=com.mysql.cj.jdbc.Driver\nspring.jpa.hibernate.ddl-auto=update\n"
        ),
        DependencyId::Postgresql => format!(
            "\n# PostgreSQL Database Configuration\nspring.datasource.url=jdbc:postgresql://localhost:5432/{db}\nspring.datasource.username=postgres\nspring.datasource.password=postgres\nspring.jpa.hibernate.ddl-auto=update\n"
        ),
        _ => String::new(),
    }
}

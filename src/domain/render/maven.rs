//! `pom.xml` renderer.

use crate::domain::catalog::{DependencySet, TEST_STARTER};
use crate::domain::render::{PROJECT_VERSION, SPRING_CLOUD_VERSION};
use crate::domain::service::{BuildSystem, ServiceConfig};

pub fn render_pom(config: &ServiceConfig) -> String {
    let deps = DependencySet::from_ids(&config.dependencies);

    let dependencies = deps
        .coordinates()
        .chain(std::iter::once(TEST_STARTER))
        .map(|c| c.fragment(BuildSystem::Maven))
        .collect::<Vec<_>>()
        .join("\n");

    let (cloud_property, cloud_management) = if deps.needs_cloud_bom() {
        (
            format!("\n        <spring-cloud.version>{SPRING_CLOUD_VERSION}</spring-cloud.version>"),
            r#"
    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.springframework.cloud</groupId>
                <artifactId>spring-cloud-dependencies</artifactId>
                <version>${spring-cloud.version}</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>"#,
        )
    } else {
        (String::new(), "")
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>{boot}</version>
        <relativePath/> <!-- lookup parent from repository -->
    </parent>
    <groupId>{group}</groupId>
    <artifactId>{artifact}</artifactId>
    <version>{PROJECT_VERSION}</version>
    <packaging>{packaging}</packaging>
    <name>{name}</name>
    <description>{description}</description>
    <properties>
        <java.version>{java}</java.version>{cloud_property}
    </properties>
    <dependencies>
{dependencies}
    </dependencies>{cloud_management}

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>

</project>
"#,
        boot = config.spring_boot_version,
        group = config.group,
        artifact = config.artifact,
        packaging = config.packaging,
        name = config.name,
        description = config.description,
        java = config.java_version,
    )
}

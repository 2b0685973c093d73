//! Class name derivation from service names.

pub const APPLICATION_SUFFIX: &str = "Application";
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Convert a kebab-case service name to PascalCase.
///
/// Each hyphen-separated segment has its first character upper-cased and the
/// rest left untouched, so `user-service` becomes `UserService` and
/// `api-v2GW` becomes `ApiV2GW`.
pub fn pascal_case(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Entry-point class name, e.g. `UserServiceApplication`.
pub fn application_class_name(service_name: &str) -> String {
    format!("{}{}", pascal_case(service_name), APPLICATION_SUFFIX)
}

/// Sample handler class name, e.g. `UserServiceController`.
pub fn controller_class_name(service_name: &str) -> String {
    format!("{}{}", pascal_case(service_name), CONTROLLER_SUFFIX)
}

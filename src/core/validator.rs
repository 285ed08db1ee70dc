use crate::core::{crossref, units};
use crate::domain::model::{SdlDocument, ValidationReport, SUPPORTED_VERSIONS};
use crate::utils::validation::{is_blank, is_positive, Validate};

/// Walk the parsed document and collect every problem found. Never fails;
/// `valid` on the returned report is simply "no errors". Error strings are
/// appended in document-declaration order so repeated runs produce identical
/// reports.
pub fn validate(doc: &SdlDocument) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_version(doc, &mut errors);
    check_services(doc, &mut errors);
    check_compute_profiles(doc, &mut errors);
    check_placement_profiles(doc, &mut errors);
    check_deployment_shape(doc, &mut errors);
    crossref::validate(doc, &mut errors);
    collect_warnings(doc, &mut warnings);

    tracing::debug!(
        "SDL validation finished: {} error(s), {} warning(s)",
        errors.len(),
        warnings.len()
    );

    ValidationReport::new(errors, warnings)
}

fn check_version(doc: &SdlDocument, errors: &mut Vec<String>) {
    match doc.version.as_deref() {
        None => errors.push("Missing SDL version".to_string()),
        Some(version) if !SUPPORTED_VERSIONS.contains(&version) => {
            errors.push(format!("Unsupported SDL version: {}", version));
        }
        Some(_) => {}
    }
}

fn check_services(doc: &SdlDocument, errors: &mut Vec<String>) {
    if doc.services.is_empty() {
        errors.push("No services defined".to_string());
        return;
    }

    for (name, service) in &doc.services {
        if is_blank(&service.image) {
            errors.push(format!("Service {} is missing an image", name));
        }
    }
}

fn check_compute_profiles(doc: &SdlDocument, errors: &mut Vec<String>) {
    if doc.profiles.compute.is_empty() {
        errors.push("No compute profiles defined".to_string());
        return;
    }

    for (name, profile) in &doc.profiles.compute {
        let resources = match &profile.resources {
            Some(resources) => resources,
            None => {
                errors.push(format!("Compute profile {} is missing resources", name));
                continue;
            }
        };

        match resources.cpu.as_ref().and_then(|cpu| cpu.units.as_deref()) {
            None => errors.push(format!("Compute profile {} is missing cpu units", name)),
            Some(literal) if units::parse_cpu_units(literal) == 0 => {
                errors.push(format!("Invalid cpu units for compute profile {}", name));
            }
            Some(_) => {}
        }

        match resources
            .memory
            .as_ref()
            .and_then(|memory| memory.size.as_deref())
        {
            None => errors.push(format!("Compute profile {} is missing memory size", name)),
            Some(size) if units::parse_memory_size(size) == 0 => {
                errors.push("Invalid memory size format".to_string());
            }
            Some(_) => {}
        }

        for storage in &resources.storage {
            let size = storage.size.as_deref().unwrap_or_default();
            if units::parse_memory_size(size) == 0 {
                errors.push("Invalid storage size format".to_string());
            }
        }
    }
}

fn check_placement_profiles(doc: &SdlDocument, errors: &mut Vec<String>) {
    if doc.profiles.placement.is_empty() {
        errors.push("No placement profiles defined".to_string());
        return;
    }

    for (placement_name, placement) in &doc.profiles.placement {
        for service_name in placement.pricing.keys() {
            if !doc.services.contains_key(service_name) {
                errors.push(format!(
                    "Pricing for unknown service {} in placement {}",
                    service_name, placement_name
                ));
            }
        }
    }
}

fn check_deployment_shape(doc: &SdlDocument, errors: &mut Vec<String>) {
    if doc.deployment.is_empty() {
        errors.push("No deployment entries defined".to_string());
        return;
    }

    for (service_name, placements) in &doc.deployment {
        for (placement_name, entry) in placements {
            if is_blank(&entry.profile) {
                errors.push(format!(
                    "Deployment {}/{} is missing a profile",
                    service_name, placement_name
                ));
            }
            if !is_positive(entry.count) {
                errors.push(format!(
                    "Deployment {}/{} must have a positive count",
                    service_name, placement_name
                ));
            }
        }
    }
}

fn collect_warnings(doc: &SdlDocument, warnings: &mut Vec<String>) {
    for name in doc.services.keys() {
        if !doc.deployment.contains_key(name) {
            warnings.push(format!("Service {} has no deployment entry", name));
        }
    }

    for (placement_name, placement) in &doc.profiles.placement {
        for (service_name, price) in &placement.pricing {
            if price.amount.trim() == "0" {
                warnings.push(format!(
                    "Pricing amount for service {} in placement {} is zero",
                    service_name, placement_name
                ));
            }
        }
    }
}

impl Validate for SdlDocument {
    fn validate(&self) -> ValidationReport {
        validate(self)
    }
}

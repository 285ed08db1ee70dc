use crate::domain::model::SdlDocument;
use crate::utils::validation::is_blank;

/// Check that every deployment entry resolves: the service must exist in
/// `services`, the placement in `profiles.placement`, and the named profile in
/// `profiles.compute`. Problems are appended as soft errors; the compiler
/// re-checks the same references and fail-fasts on its own.
pub fn validate(doc: &SdlDocument, errors: &mut Vec<String>) {
    for (service_name, placements) in &doc.deployment {
        if !doc.services.contains_key(service_name) {
            errors.push(format!(
                "Deployment references unknown service {}",
                service_name
            ));
        }

        for (placement_name, entry) in placements {
            match doc.profiles.placement.get(placement_name) {
                None => errors.push(format!(
                    "Deployment {} references unknown placement {}",
                    service_name, placement_name
                )),
                // Same message the compiler fails hard with.
                Some(placement) if !placement.pricing.contains_key(service_name) => {
                    errors.push(format!(
                        "Missing pricing for service {} in placement {}",
                        service_name, placement_name
                    ));
                }
                Some(_) => {}
            }

            // A blank profile is already reported as a shape error.
            if is_blank(&entry.profile) {
                continue;
            }
            let profile = entry.profile.as_deref().unwrap_or_default();
            if !doc.profiles.compute.contains_key(profile) {
                errors.push(format!(
                    "Deployment {}/{} references unknown compute profile {}",
                    service_name, placement_name, profile
                ));
            }
        }
    }
}

use crate::core::units;
use crate::domain::manifest::{ManifestGroup, ManifestResources};
use crate::domain::model::{ComputeProfile, SdlDocument};
use crate::utils::error::{Result, SdlError};
use crate::utils::validation::is_positive;

/// Lower a validated document into manifest groups, one per
/// (service, placement) pair in the deployment mapping, in document order.
///
/// Callers are expected to run `validate` first. The reference checks here
/// are a safety net, not the primary validation path: any unresolvable entry
/// aborts the whole compilation, no partial manifest is returned.
pub fn compile(doc: &SdlDocument) -> Result<Vec<ManifestGroup>> {
    let mut groups = Vec::new();

    for (service_name, placements) in &doc.deployment {
        for (placement_name, entry) in placements {
            let service = doc.services.get(service_name);
            let placement = doc.profiles.placement.get(placement_name);
            let profile_name = entry.profile.as_deref().unwrap_or_default();
            let compute = doc.profiles.compute.get(profile_name);

            let (placement, compute) = match (service, placement, compute) {
                (Some(_), Some(placement), Some(compute)) => (placement, compute),
                _ => {
                    return Err(SdlError::validation(format!(
                        "Missing service or compute profile for {}",
                        service_name
                    )))
                }
            };

            let price = placement.pricing.get(service_name).cloned().ok_or_else(|| {
                SdlError::validation(format!(
                    "Missing pricing for service {} in placement {}",
                    service_name, placement_name
                ))
            })?;

            if !is_positive(entry.count) {
                return Err(SdlError::validation(format!(
                    "Invalid replica count for {}",
                    service_name
                )));
            }

            groups.push(ManifestGroup {
                name: service_name.clone(),
                resources: resolve_resources(profile_name, compute)?,
                count: entry.count.unwrap_or_default(),
                price,
            });
        }
    }

    tracing::debug!("Compiled {} manifest group(s)", groups.len());
    Ok(groups)
}

/// Resolve a compute profile's size literals into numeric quantities. The
/// unit converter signals "unparseable" with 0, which must never leak into a
/// manifest as a legitimate quantity.
fn resolve_resources(profile_name: &str, compute: &ComputeProfile) -> Result<ManifestResources> {
    let invalid = || {
        SdlError::validation(format!(
            "Invalid resource size for compute profile {}",
            profile_name
        ))
    };

    let resources = compute.resources.as_ref().ok_or_else(invalid)?;

    let cpu_units = resources
        .cpu
        .as_ref()
        .and_then(|cpu| cpu.units.as_deref())
        .map(units::parse_cpu_units)
        .unwrap_or_default();
    if cpu_units == 0 {
        return Err(invalid());
    }

    let memory_bytes = resources
        .memory
        .as_ref()
        .and_then(|memory| memory.size.as_deref())
        .map(units::parse_memory_size)
        .unwrap_or_default();
    if memory_bytes == 0 {
        return Err(invalid());
    }

    let mut storage_bytes = Vec::with_capacity(resources.storage.len());
    for storage in &resources.storage {
        let bytes = storage
            .size
            .as_deref()
            .map(units::parse_memory_size)
            .unwrap_or_default();
        if bytes == 0 {
            return Err(invalid());
        }
        storage_bytes.push(bytes);
    }

    Ok(ManifestResources {
        cpu_units,
        memory_bytes,
        storage_bytes,
    })
}

use crate::core::icons::random_shuttle_icon;
use crate::domain::model::{ResponsePayload, SpacecraftGroup, UpstreamPayload};
use rand::Rng;

/// Groups astronauts by craft using the thread-local RNG for icons.
pub fn regroup(astro_data: UpstreamPayload) -> ResponsePayload {
    regroup_with_rng(astro_data, &mut rand::thread_rng())
}

/// Groups astronauts by craft.
///
/// Groups appear in the order their craft is first seen, and each crew keeps
/// input order. Crafts match on exact string equality. A linear scan is
/// enough here: the upstream list is bounded by the number of people in orbit.
pub fn regroup_with_rng<R: Rng + ?Sized>(astro_data: UpstreamPayload, rng: &mut R) -> ResponsePayload {
    let mut spacecrafts: Vec<SpacecraftGroup> = Vec::new();

    for person in astro_data.people {
        let index = match spacecrafts.iter().position(|sc| sc.craft == person.craft) {
            Some(index) => index,
            None => {
                let icon = random_shuttle_icon(rng);
                tracing::debug!("New spacecraft group '{}' with icon {}", person.craft, icon);
                spacecrafts.push(SpacecraftGroup::new(person.craft, icon));
                spacecrafts.len() - 1
            }
        };
        spacecrafts[index].crew.push(person.name);
    }

    ResponsePayload {
        number_of_people: astro_data.number,
        spacecrafts,
        message: astro_data.message,
    }
}

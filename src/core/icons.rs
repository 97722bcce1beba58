use rand::Rng;

pub const SHUTTLE_ICONS: [&str; 4] = [
    "https://cdn-icons-png.flaticon.com/512/6989/6989388.png",
    "https://cdn-icons-png.flaticon.com/512/2909/2909710.png",
    "https://cdn-icons-png.flaticon.com/512/4657/4657691.png",
    "https://cdn-icons-png.flaticon.com/512/3594/3594735.png",
];

/// Uniform pick from [`SHUTTLE_ICONS`]. Each call is an independent draw.
pub fn random_shuttle_icon<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SHUTTLE_ICONS[rng.gen_range(0..SHUTTLE_ICONS.len())]
}

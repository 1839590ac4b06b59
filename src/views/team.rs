//! Static team roster

use uuid::Uuid;

/// Number of distinct avatars offered by the avatar service
pub const AVATAR_COUNT: u32 = 70;

/// Source of avatar numbers in `1..=AVATAR_COUNT`
pub trait AvatarPicker {
    fn pick(&mut self) -> u32;
}

/// Draws from v4 UUID randomness
#[derive(Debug, Default)]
pub struct RandomAvatars;

impl AvatarPicker for RandomAvatars {
    fn pick(&mut self) -> u32 {
        (Uuid::new_v4().as_u128() % u128::from(AVATAR_COUNT)) as u32 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: String,
}

impl TeamMember {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

const ROSTER: [(&str, &str); 4] = [
    ("Tara", "Full Stack Developer"),
    ("Grace", "Full Stack Developer"),
    ("Rebecca", "Full Stack Developer"),
    ("Araya", "Backend Developer"),
];

#[derive(Debug, Clone)]
pub struct TeamView {
    members: Vec<TeamMember>,
}

impl TeamView {
    pub fn new(avatar_base_url: &str, picker: &mut impl AvatarPicker) -> Self {
        let members = ROSTER
            .iter()
            .map(|&(name, role)| TeamMember {
                name,
                role,
                avatar: avatar_url(avatar_base_url, picker.pick()),
            })
            .collect();
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

fn avatar_url(base: &str, img: u32) -> String {
    format!("{}?img={}", base, img.clamp(1, AVATAR_COUNT))
}

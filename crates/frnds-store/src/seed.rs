use tracing::info;

use frnds_types::{Gender, Profile, Socials};

use crate::error::Result;
use crate::Store;

struct DemoAccount {
    username: &'static str,
    password: &'static str,
    age: u32,
    gender: Gender,
    photos: [&'static str; 3],
    socials: [&'static str; 3],
    status_text: &'static str,
    spotify_url: &'static str,
}

impl DemoAccount {
    fn profile(&self) -> Profile {
        let [instagram, snapchat, tiktok] = self.socials;
        Profile {
            age: Some(self.age),
            gender: self.gender,
            photos: self.photos.iter().map(|p| p.to_string()).collect(),
            socials: Socials {
                instagram: instagram.into(),
                snapchat: snapchat.into(),
                tiktok: tiktok.into(),
            },
            status_text: self.status_text.into(),
            spotify_url: self.spotify_url.into(),
            ..Profile::default()
        }
    }
}

const ADMIN: DemoAccount = DemoAccount {
    username: "admin",
    password: "admin123",
    age: 24,
    gender: Gender::Man,
    photos: [
        "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=800",
        "https://images.unsplash.com/photo-1544006659-f0b21884ce1d?w=800",
        "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?w=800",
    ],
    socials: ["admin.demo", "", ""],
    status_text: "👋 Admin account, welcome!",
    spotify_url: "https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl",
};

const DEMOS: [DemoAccount; 3] = [
    DemoAccount {
        username: "lina",
        password: "test123",
        age: 21,
        gender: Gender::Vrouw,
        photos: [
            "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=800",
            "https://images.unsplash.com/photo-1520813792240-56fc4a3765a7?w=800",
            "https://images.unsplash.com/photo-1524504388940-1f64b7e25f64?w=800",
        ],
        socials: ["lina.demo", "", "lina_demo"],
        status_text: "Be kind ✨",
        spotify_url: "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b",
    },
    DemoAccount {
        username: "milan",
        password: "test123",
        age: 23,
        gender: Gender::Man,
        photos: [
            "https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=800",
            "https://images.unsplash.com/photo-1527980965255-2e7a6aeae0c4?w=800",
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800",
        ],
        socials: ["milan.demo", "milan_demo", ""],
        status_text: "Gym & koffie ☕",
        spotify_url: "https://open.spotify.com/track/2Fxmhks0bxGSBdJ92vM42m",
    },
    DemoAccount {
        username: "sofia",
        password: "test123",
        age: 20,
        gender: Gender::Vrouw,
        photos: [
            "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=800",
            "https://images.unsplash.com/photo-1517842255-6f5dc3a4516f?w=800",
            "https://images.unsplash.com/photo-1521119989659-a83eee488004?w=800",
        ],
        socials: ["", "", "sofia_demo"],
        status_text: "City trips 🛫",
        spotify_url: "https://open.spotify.com/track/3AJwUDP919kvQ9QcozQPxg",
    },
];

/// Adds the admin and demo accounts that are missing. Safe to call repeatedly.
/// Returns how many accounts were created.
pub fn seed_demo(store: &Store) -> Result<usize> {
    store.with_state_mut(|s| {
        let mut created = 0;

        if s.directory.find_by_handle(ADMIN.username).is_none() {
            s.directory
                .register_admin(ADMIN.username, ADMIN.password, ADMIN.profile())?;
            created += 1;
        }

        for demo in &DEMOS {
            if s.directory.find_by_handle(demo.username).is_none() {
                s.directory
                    .register(demo.username, demo.password, demo.profile())?;
                created += 1;
            }
        }

        info!("Seeded {} demo accounts", created);
        Ok(created)
    })
}

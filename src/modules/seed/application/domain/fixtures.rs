//! Fixed demo data inserted by the `seed_data` binary.

/// Every seeded account logs in with this password.
pub const SEED_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub username: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
}

pub const SEED_USERS: [SeedUser; 8] = [
    SeedUser {
        username: "alice",
        first_name: "Alice",
        last_name: "Martin",
        email: "alice@demo.com",
        bio: "Coffee lover ☕ | Traveller 🌍",
    },
    SeedUser {
        username: "bob",
        first_name: "Bob",
        last_name: "Johnson",
        email: "bob@demo.com",
        bio: "Basketball fan 🏀 | Dev by day",
    },
    SeedUser {
        username: "carol",
        first_name: "Carol",
        last_name: "Williams",
        email: "carol@demo.com",
        bio: "Photographer 📷 | Dog mom 🐶",
    },
    SeedUser {
        username: "dave",
        first_name: "Dave",
        last_name: "Brown",
        email: "dave@demo.com",
        bio: "Gym rat 💪 | Foodie 🍕",
    },
    SeedUser {
        username: "eve",
        first_name: "Eve",
        last_name: "Davis",
        email: "eve@demo.com",
        bio: "Bookworm 📚 | Tea enthusiast 🍵",
    },
    SeedUser {
        username: "frank",
        first_name: "Frank",
        last_name: "Miller",
        email: "frank@demo.com",
        bio: "Gamer 🎮 | Night owl 🦉",
    },
    SeedUser {
        username: "grace",
        first_name: "Grace",
        last_name: "Wilson",
        email: "grace@demo.com",
        bio: "Yoga instructor 🧘 | Plant parent 🌱",
    },
    SeedUser {
        username: "henry",
        first_name: "Henry",
        last_name: "Moore",
        email: "henry@demo.com",
        bio: "Music producer 🎧 | Car enthusiast 🚗",
    },
];

/// Mutual friendships by username.
pub const FRIEND_PAIRS: [(&str, &str); 8] = [
    ("alice", "bob"),
    ("alice", "carol"),
    ("alice", "eve"),
    ("bob", "dave"),
    ("bob", "frank"),
    ("carol", "grace"),
    ("dave", "henry"),
    ("eve", "grace"),
];

pub const POST_TEXTS: [&str; 20] = [
    "Just got back from the most amazing road trip! The views were absolutely breathtaking. 🌄",
    "Tried a new recipe today — homemade ramen from scratch. Took 4 hours but so worth it! 🍜",
    "Can't believe how fast this year is going. Grateful for every moment though. 🙏",
    "Working from a coffee shop today. Productivity: 10/10. Vibes: also 10/10. ☕💻",
    "Finally finished reading Dune! What an absolute masterpiece. Any book recommendations?",
    "Morning run ✅ Healthy breakfast ✅ Now just need the motivation to open my laptop 😅",
    "Hot take: pineapple on pizza is actually incredible. Fight me. 🍍🍕",
    "Just adopted a rescue dog! Meet Biscuit 🐾 He's already stolen my heart (and my socks).",
    "Three things I'm grateful for today: good coffee, sunshine, and fast Wi-Fi. Simple joys.",
    "Anyone else feel like weekends go by 3× faster than weekdays? The physics don't add up.",
    "Spent the whole day reorganising my room and honestly it's giving me a new lease on life.",
    "Just discovered a tiny bookshop around the corner from my flat. This is dangerous.",
    "Learning to play guitar — my fingers hurt but I can now almost play Wonderwall 🎸",
    "PSA: drink water, touch grass, and call someone you miss today. That's the whole post.",
    "Some days the imposter syndrome hits harder than others. Remind yourself you belong here.",
    "Just hit 100 commits on my side project! It's far from done but progress is progress 🚀",
    "Street food festival in town today and I have zero regrets about what I spent 🌮🥙",
    "Reminder that it's okay to rest. You don't have to be productive every single day.",
    "Watched the sunrise this morning for the first time in forever. 10/10 would recommend.",
    "My cat just knocked over my coffee, stared at me, and walked away. Iconic behaviour.",
];

pub const COMMENT_PHRASES: [&str; 15] = [
    "This is so relatable! 😂",
    "Love this! ❤️",
    "You're absolutely right on this one.",
    "Okay but same though 😅",
    "This made my day, thank you!",
    "Such a vibe ✨",
    "I needed to read this today.",
    "Haha this is literally me every time 😂",
    "Facts! Couldn't agree more.",
    "Wait, we need to talk about this more 👀",
    "This is goals honestly.",
    "Sending good vibes your way 🙌",
    "The accuracy of this post is concerning 😭",
    "Okay I'm stealing this idea, hope you don't mind!",
    "Please tell me there are more photos from this!",
];

/// (sender, receiver, content) by username.
pub const SCRIPTED_MESSAGES: [(&str, &str, &str); 15] = [
    ("alice", "bob", "Hey Bob! How have you been? 😊"),
    ("bob", "alice", "Alice! Long time no see. I've been great, just super busy with work. You?"),
    ("alice", "bob", "Same here! We should catch up properly soon. Coffee this weekend?"),
    ("bob", "alice", "100%! Saturday works for me. Pick a spot and I'm there ☕"),
    ("carol", "dave", "Dave did you see the game last night??"),
    ("dave", "carol", "YES! Unbelievable finish. My heart nearly gave out 😂"),
    ("carol", "dave", "Same haha. Anyway, are you coming to Eve's thing on Friday?"),
    ("dave", "carol", "Wouldn't miss it. Should I bring food?"),
    ("eve", "frank", "Frank I need your honest opinion on something"),
    ("frank", "eve", "Always. Hit me."),
    ("eve", "frank", "Should I quit my job and go freelance? I've been thinking about it for months."),
    ("frank", "eve", "That's a big step. What does your gut say? Because honestly you're talented enough."),
    ("grace", "henry", "Your last playlist was 🔥 please make another one"),
    ("henry", "grace", "Haha already on it! Dropped a new one this morning, check it out 🎧"),
    ("grace", "henry", "How are you always so consistent?? Teach me your ways."),
];

/// Fill colours for generated placeholder images.
pub const PLACEHOLDER_COLOURS: [[u8; 3]; 8] = [
    [29, 161, 242],
    [225, 48, 108],
    [66, 183, 42],
    [255, 165, 0],
    [138, 43, 226],
    [220, 53, 69],
    [23, 162, 184],
    [255, 193, 7],
];

pub const PLACEHOLDER_WIDTH: u32 = 800;
pub const PLACEHOLDER_HEIGHT: u32 = 600;

/// Every third post, starting with the first, carries an image.
pub fn post_has_image(index: usize) -> bool {
    index % 3 == 0
}

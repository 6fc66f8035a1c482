//! Hardcoded first-launch data, used whenever nothing usable is persisted.

use chrono::NaiveDate;

use crate::models::{ChatMessage, Contact, Group, GroupPost, HealthRecord, Post, Sender};

pub fn health_record(today: NaiveDate) -> HealthRecord {
    HealthRecord {
        steps: vec![5234.0, 7891.0, 6543.0, 8234.0, 6234.0, 9123.0, 7456.0],
        sleep: vec![7.5, 6.8, 8.2, 7.0, 7.75, 8.5, 7.2],
        calories: vec![1650.0, 1890.0, 2100.0, 1750.0, 1850.0, 2200.0, 1920.0],
        last_updated: today,
    }
}

fn post(id: &str, author: &str, age: &str, body: &str, likes: u32, comments: u32) -> Post {
    Post {
        id: id.to_string(),
        author: author.to_string(),
        posted_at: age.to_string(),
        body: body.to_string(),
        like_count: likes,
        comment_count: comments,
        liked_by_viewer: false,
    }
}

pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Liam",
            "2h",
            "Just finished a great workout! Feeling energized and ready to tackle the day. #fitness #healthylifestyle",
            23,
            5,
        ),
        post(
            "2",
            "Sophia",
            "4h",
            "Made a delicious and nutritious smoothie this morning. Packed with fruits and veggies! #healthyfood #smoothierecipe",
            32,
            8,
        ),
        post(
            "3",
            "Ethan",
            "6h",
            "Took some time for mindfulness and meditation today. Feeling calm and focused. #mentalhealth #mindfulness",
            15,
            2,
        ),
    ]
}

fn group_post(author: &str, age: &str, body: &str, likes: u32, comments: u32) -> GroupPost {
    GroupPost {
        author: author.to_string(),
        posted_at: age.to_string(),
        body: body.to_string(),
        like_count: likes,
        comment_count: comments,
    }
}

pub fn groups() -> Vec<Group> {
    vec![
        Group {
            name: "Fitness Teens".to_string(),
            members: 1234,
            description: "Join fellow fitness enthusiasts to share workouts, tips, and motivation!"
                .to_string(),
            posts: vec![
                group_post("Alex", "1h", "Just completed a 5K run! New personal best! 🏃‍♂️", 45, 12),
                group_post("Sarah", "3h", "Anyone want to join me for a morning yoga session tomorrow?", 28, 8),
                group_post("Mike", "5h", "Sharing my weekly workout routine. Check it out!", 67, 15),
            ],
        },
        Group {
            name: "Healthy Recipes".to_string(),
            members: 892,
            description: "Discover and share delicious, nutritious recipes for a healthier lifestyle."
                .to_string(),
            posts: vec![
                group_post("Emma", "2h", "Made this amazing quinoa bowl today! Recipe in comments 🥗", 89, 23),
                group_post("David", "4h", "Looking for high-protein vegetarian meal ideas. Suggestions?", 34, 19),
                group_post("Lisa", "6h", "Smoothie Sunday! Here's my favorite green smoothie recipe.", 56, 11),
            ],
        },
        Group {
            name: "Mental Wellness".to_string(),
            members: 756,
            description: "A supportive community for mental health, mindfulness, and self-care."
                .to_string(),
            posts: vec![
                group_post("Jordan", "1h", "Meditation really helped me today. Feeling so much calmer 🧘", 52, 9),
                group_post("Taylor", "3h", "What are your favorite stress-relief techniques?", 41, 16),
                group_post("Casey", "7h", "Reminder: It's okay to take a break and prioritize yourself ❤️", 78, 14),
            ],
        },
    ]
}

fn contact(name: &str, last_message: &str, age: &str, unread: bool) -> Contact {
    Contact {
        name: name.to_string(),
        last_message: last_message.to_string(),
        last_active: age.to_string(),
        unread,
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact("Liam", "See you at the gym!", "2m", true),
        contact("Nathan", "Thanks for the recipe!", "1h", false),
        contact("MM", "How was your workout?", "3h", false),
        contact("Dom", "Let's catch up soon", "5h", false),
        contact("Jezz", "Great progress!", "1d", false),
        contact("Lana", "See you tomorrow", "2d", false),
    ]
}

/// Opening transcript of every seeded conversation.
pub fn chat_transcript() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Sender::Them, "Hey! How's your fitness journey going?", "10:30 AM"),
        ChatMessage::new(Sender::Me, "Going great! Just hit my step goal today 🎉", "10:32 AM"),
        ChatMessage::new(Sender::Them, "That's awesome! Keep it up!", "10:33 AM"),
        ChatMessage::new(Sender::Me, "Thanks! How about you?", "10:35 AM"),
        ChatMessage::new(Sender::Them, "See you at the gym!", "10:36 AM"),
    ]
}

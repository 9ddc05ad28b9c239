//! First-run fixture data.
//!
//! Slots initialize lazily: the user directory and the post collection fall
//! back to these records whenever their slot is missing or unreadable.
//! Nothing is written at startup; the first mutation materializes the slot.

use chrono::{Duration, Utc};

use crate::models::{Comment, Identity, Post, Role};

/// The seeded user directory: one admin and two authors.
pub fn users() -> Vec<Identity> {
    vec![
        Identity {
            id: "admin-1".into(),
            name: "Admin User".into(),
            email: "admin@lumina.com".into(),
            role: Role::Admin,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".into(),
            earnings: 1250.50,
        },
        Identity {
            id: "author-1".into(),
            name: "Sarah Jenkins".into(),
            email: "sarah@writer.com".into(),
            role: Role::Author,
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".into(),
            earnings: 340.20,
        },
        Identity {
            id: "author-2".into(),
            name: "David Chen".into(),
            email: "david@tech.com".into(),
            role: Role::Author,
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".into(),
            earnings: 89.50,
        },
    ]
}

/// The seeded post collection, newest first.
pub fn posts() -> Vec<Post> {
    let sarah_avatar = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
    let david_avatar = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

    vec![
        Post {
            id: "post-1".into(),
            title: "The Future of Web Development in 2025".into(),
            excerpt: "Exploring the latest trends in frontend frameworks, AI integration, and edge computing.".into(),
            content: "\
# The Future is Here

Web development is evolving at a breakneck pace. With the advent of powerful AI tools and edge computing, the way we build and deploy applications is changing fundamentally.

## AI-Driven Development

It is no longer just about writing code; it is about orchestrating intelligence. Developers are now leveraging LLMs to generate boilerplate, optimize algorithms, and even design UI components on the fly.

## The Edge

Edge computing brings the server closer to the user, reducing latency and improving the overall user experience. This is crucial for real-time applications and high-frequency trading platforms.

### Conclusion

To stay relevant, developers must adapt to these changes. Continuous learning is the key.
".into(),
            cover_image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80".into(),
            author_id: "author-1".into(),
            author_name: "Sarah Jenkins".into(),
            author_avatar: Some(sarah_avatar.into()),
            created_at: Utc::now() - Duration::days(2),
            views: 1240,
            likes: 45,
            tags: vec!["Tech".into(), "Development".into(), "Future".into()],
            published: true,
            comments: vec![Comment {
                id: "c1".into(),
                author_id: "reader-1".into(),
                author_name: "Alex Reader".into(),
                author_avatar: None,
                content: "Great insights! AI is definitely changing the game.".into(),
                created_at: Utc::now() - Duration::days(1),
            }],
        },
        Post {
            id: "post-2".into(),
            title: "10 Tips for Minimalist Living".into(),
            excerpt: "How to declutter your life and focus on what truly matters.".into(),
            content: "Minimalism is not just about having less stuff; it is about making room for more of what matters...".into(),
            cover_image: "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?ixlib=rb-4.0.3&auto=format&fit=crop&w=2068&q=80".into(),
            author_id: "author-2".into(),
            author_name: "David Chen".into(),
            author_avatar: Some(david_avatar.into()),
            created_at: Utc::now() - Duration::days(5),
            views: 850,
            likes: 128,
            tags: vec!["Lifestyle".into(), "Minimalism".into()],
            published: true,
            comments: Vec::new(),
        },
        Post {
            id: "post-3".into(),
            title: "Understanding Quantum Computing".into(),
            excerpt: "A beginner-friendly guide to qubits, superposition, and entanglement.".into(),
            content: "Quantum computing harnesses the phenomena of quantum mechanics to deliver a huge leap forward in computation...".into(),
            cover_image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80".into(),
            author_id: "author-1".into(),
            author_name: "Sarah Jenkins".into(),
            author_avatar: Some(sarah_avatar.into()),
            created_at: Utc::now() - Duration::days(10),
            views: 2100,
            likes: 342,
            tags: vec!["Science".into(), "Tech".into()],
            published: true,
            comments: Vec::new(),
        },
    ]
}

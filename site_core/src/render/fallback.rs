//! Static content served when the CMS has nothing to offer

use crate::models::{Feature, Homepage, Service};

pub const FALLBACK_BUTTON_TEXT: &str = "Book Now";

pub fn homepage() -> Homepage {
    Homepage {
        hero_title: "UK's #1 Pet Sitting & Dog Walking Company".to_string(),
        hero_subtitle: Some("Nationally known, locally owned".to_string()),
        hero_button_text: Some("Find your local branch".to_string()),
        hero_button_link: Some("/branches".to_string()),
        hero_image: None,
        services_title: Some("Pet care services for every type of animal".to_string()),
        services_subtitle: Some("We care for every type of animal, however big or small!".to_string()),
        why_choose_us_title: Some("Why choose We Love Pets?".to_string()),
        media_title: Some("We Love Pets | BBC".to_string()),
        media_subtitle: Some("'Experts on dog walking'".to_string()),
        media_description: Some(
            "We Love Pets was invited to BBC Breakfast as expert speakers on how to walk dogs \
             correctly. Managing Director and dog behaviourist Ryan went along with his dog Red \
             to demonstrate…"
                .to_string(),
        ),
        media_video_url: None,
    }
}

fn service(id: u64, title: &str, slug: &str, short_description: &str) -> Service {
    Service {
        id,
        document_id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: None,
        short_description: Some(short_description.to_string()),
        image: None,
        icon: None,
        order: id as i32,
        button_text: Some(FALLBACK_BUTTON_TEXT.to_string()),
        button_link: None,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            1,
            "Dog Walking",
            "dog-walking",
            "Our Dog Walking service runs throughout the day, every day. Your dog will be walked \
             in a safe open space and will return home, happy and tired. We also provide fresh \
             water, treats and will towel your dog off in wet weather",
        ),
        service(
            2,
            "Pop-in Visits",
            "pop-in-visits",
            "Pop-in visits are a great option for those times when your pet just needs a little \
             extra care during the day. We can stop by to provide fresh food and water, a quick \
             walk or play session, and plenty of fuss and attention.",
        ),
        service(
            3,
            "Pet Sitting",
            "pet-sitting",
            "Pet sitting is ideal for when you're away and want your furry friends to stay in \
             the comfort of their own home. We can tailor visits to your needs providing fresh \
             food and water, playtime, and cuddles, while ensuring your home remains secure.",
        ),
        service(
            4,
            "Dog Sitting",
            "dog-sitting",
            "Our dog sitters provide company and toilet breaks for your dog when you're unable \
             to pop home and let them out. Ideal if you work long shifts or if your dog needs \
             medication, frequent feeding or regular trips to the garden.",
        ),
        service(
            5,
            "Dog Boarding",
            "dog-boarding",
            "Our home-from-home dog boarding service is a great alternative to traditional dog \
             boarding kennels. Ideal for when you go on holiday and want your dog to be \
             thoroughly pampered and looked after while you are away.",
        ),
        service(
            6,
            "Cat Sitting",
            "cat-sitting",
            "Cat sitting is perfect for when you are on holiday and want your cat to stay at \
             home where they are comfortable. We can visit as often as you like to provide \
             fresh water, food, make a fuss and check your house is safe and secure.",
        ),
    ]
}

fn feature(id: u64, title: &str, description: &str, link_text: &str, link_url: &str) -> Feature {
    Feature {
        id,
        document_id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        icon: None,
        image: None,
        link_text: Some(link_text.to_string()),
        link_url: Some(link_url.to_string()),
        order: id as i32,
    }
}

pub fn features() -> Vec<Feature> {
    vec![
        feature(
            1,
            "We never pack walk",
            "We give your dog a physically demanding, stimulating and above all, safe dog walk \
             which is why we walk no more than four dogs at a time as part of our promise to \
             deliver the best pet care possible. Find out why pack walking is dangerous…",
            "Find out about no pack walking",
            "/about/no-pack-walking",
        ),
        feature(
            2,
            "We're a family business",
            "We Love Pets is owned by husband and wife Ryan and Jo who have always kept people \
             and their pets at the heart of what they do. Both are animal mad and it looks like \
             their two children are headed that way too…",
            "Read our story",
            "/about",
        ),
        feature(
            3,
            "We offer the dream job",
            "For many people, getting out from behind a desk to spend more time in the fresh \
             air, work with animals, work flexible hours and be your own boss is a dream come \
             true. Would you like to make your passion for pets a career?",
            "Discover your dream job",
            "/careers",
        ),
    ]
}

// db/seed.rs
//! Demo data loaded at start-up so every screen has something to show.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::{
    chatdb::ChatExt, db::DBClient, gigdb::GigExt, notificationdb::NotificationExt, userdb::UserExt,
};
use crate::models::{
    chatmodels::{ChatPartner, ConversationKey, Message},
    gigmodel::{Gig, GigCategory, GigStatus},
    notificationmodel::{Notification, NotificationAction, NotificationKind},
    offermodel::{Offer, OfferStatus},
    usermodel::*,
};
use crate::router::screen::Screen;

fn ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

fn person(name: &str, email: &str, role: UserRole, credits: u32) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        role: Some(role),
        avatar: None,
        phone: None,
        credits: Some(credits),
    }
}

struct Bid<'a> {
    labor: &'a User,
    rating: f32,
    price: u64,
    estimated_time: &'a str,
    description: &'a str,
    status: OfferStatus,
}

struct Posting<'a> {
    customer: &'a User,
    title: &'a str,
    description: &'a str,
    category: GigCategory,
    budget: Option<u64>,
    status: GigStatus,
    minutes_ago: i64,
}

fn gig(posting: Posting<'_>, location: &str, bids: Vec<Bid<'_>>) -> Gig {
    let id = Uuid::new_v4();
    let offers: Vec<Offer> = bids
        .into_iter()
        .enumerate()
        .map(|(i, bid)| Offer {
            id: Uuid::new_v4(),
            gig_id: id,
            labor_id: bid.labor.id,
            labor_name: bid.labor.name.clone(),
            labor_avatar: None,
            labor_rating: Some(bid.rating),
            price: bid.price,
            description: bid.description.to_string(),
            estimated_time: bid.estimated_time.to_string(),
            status: bid.status,
            created_at: ago(posting.minutes_ago - 30 * (i as i64 + 1)),
        })
        .collect();
    let accepted_offer_id = offers
        .iter()
        .find(|o| o.status == OfferStatus::Accepted)
        .map(|o| o.id);

    Gig {
        id,
        customer_id: posting.customer.id,
        customer_name: posting.customer.name.clone(),
        title: posting.title.to_string(),
        description: posting.description.to_string(),
        category: posting.category,
        budget: posting.budget,
        location: location.to_string(),
        photos: Vec::new(),
        status: posting.status,
        created_at: ago(posting.minutes_ago),
        offers,
        accepted_offer_id,
    }
}

#[allow(clippy::too_many_arguments)]
fn notice(
    recipient: Option<Uuid>,
    audience: UserRole,
    kind: NotificationKind,
    title: &str,
    message: String,
    user_name: Option<&str>,
    action: NotificationAction,
    minutes_ago: i64,
) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        recipient_id: recipient,
        audience,
        kind,
        title: title.to_string(),
        message,
        user_name: user_name.map(str::to_string),
        is_read: false,
        action: Some(action),
        created_at: ago(minutes_ago),
    }
}

pub fn seed_demo_data(db: &DBClient, location: &str) {
    let customer = db.save_user(DemoAccount::Customer.user());
    let pro = db.save_user(DemoAccount::Professional.user());
    db.save_user(DemoAccount::Admin.user());

    db.save_profile_details(
        customer.id,
        ProfileDetails { location: location.to_string(), bio: None, skills: Vec::new() },
    );
    db.save_profile_details(
        pro.id,
        ProfileDetails {
            location: location.to_string(),
            bio: Some("Reliable handyman with 8 years of experience in home repairs.".to_string()),
            skills: vec!["Plumbing".to_string(), "Electrical".to_string(), "Carpentry".to_string()],
        },
    );

    let arben = db.save_user(person("Arben Hoxha", "arben@demo.com", UserRole::Labor, 12));
    let elena = db.save_user(person("Elena Krasniqi", "elena@demo.com", UserRole::Labor, 8));
    let dritan = db.save_user(person("Dritan Kola", "dritan@demo.com", UserRole::Labor, 4));
    let ana = db.save_user(person("Ana Krasniqi", "ana@demo.com", UserRole::Customer, 5));
    let besart = db.save_user(person("Besart Hoxha", "besart@demo.com", UserRole::Customer, 5));
    let linda = db.save_user(person("Linda Berisha", "linda@demo.com", UserRole::Customer, 5));

    // Demo customer: one gig taking offers, one in progress, one waiting for a review.
    let pipe = db.save_gig(gig(
        Posting {
            customer: &customer,
            title: "Fix leaking bathroom pipe",
            description: "My bathroom sink has been leaking for 2 days. Need urgent help.",
            category: GigCategory::Plumber,
            budget: Some(5000),
            status: GigStatus::Open,
            minutes_ago: 180,
        },
        location,
        vec![
            Bid {
                labor: &arben,
                rating: 4.8,
                price: 4500,
                estimated_time: "2-3 hours",
                description: "I have 10 years of experience in plumbing. I can fix this today.",
                status: OfferStatus::Pending,
            },
            Bid {
                labor: &elena,
                rating: 4.9,
                price: 5200,
                estimated_time: "3 hours",
                description: "Licensed plumber with warranty on all work.",
                status: OfferStatus::Pending,
            },
        ],
    ));
    db.save_gig(gig(
        Posting {
            customer: &customer,
            title: "Install new ceiling lights",
            description: "Need to install 3 LED ceiling lights in the living room.",
            category: GigCategory::Electrician,
            budget: Some(8000),
            status: GigStatus::Accepted,
            minutes_ago: 2 * 24 * 60,
        },
        location,
        vec![Bid {
            labor: &dritan,
            rating: 5.0,
            price: 7500,
            estimated_time: "3 hours",
            description: "Licensed electrician. Can install them professionally.",
            status: OfferStatus::Accepted,
        }],
    ));
    db.save_gig(gig(
        Posting {
            customer: &customer,
            title: "Paint bedroom walls",
            description: "Need to repaint 2 bedroom walls, paint already bought.",
            category: GigCategory::Painter,
            budget: None,
            status: GigStatus::Completed,
            minutes_ago: 5 * 24 * 60,
        },
        location,
        vec![Bid {
            labor: &pro,
            rating: 4.7,
            price: 6500,
            estimated_time: "1 day",
            description: "Clean work, furniture covered and moved back.",
            status: OfferStatus::Accepted,
        }],
    ));

    // Open gigs from other customers for the professionals' browser.
    let browse = [
        (&ana, "Fix leaking kitchen pipe", "Pipe under the kitchen sink is dripping. Need someone to fix it this week.", GigCategory::Plumber, 5000, 60),
        (&besart, "Install ceiling fan", "Need to install a new ceiling fan in bedroom. Fan is already purchased.", GigCategory::Electrician, 4000, 120),
        (&linda, "Paint living room walls", "Need to repaint living room walls (approximately 40 square meters). Paint will be provided.", GigCategory::Painter, 8000, 240),
        (&ana, "Fix broken door lock", "Front door lock is broken and needs replacement. Need someone with experience.", GigCategory::Handyman, 3000, 300),
        (&besart, "Install kitchen cabinets", "Need help installing new kitchen cabinets. All materials are ready.", GigCategory::Carpenter, 6000, 24 * 60),
        (&linda, "Repair electrical wiring", "Some electrical outlets not working properly. Need licensed electrician.", GigCategory::Electrician, 7000, 2 * 24 * 60),
    ];
    let mut browse_gigs = Vec::new();
    for (owner, title, description, category, budget, minutes_ago) in browse {
        browse_gigs.push(db.save_gig(gig(
            Posting {
                customer: owner,
                title,
                description,
                category,
                budget: Some(budget),
                status: GigStatus::Open,
                minutes_ago,
            },
            location,
            Vec::new(),
        )));
    }

    let arben_chat = ChatPartner { user_id: arben.id, user_name: arben.name.clone(), gig_id: pipe.id };
    db.append_message(
        ConversationKey::new(pipe.id, customer.id, arben.id),
        Message {
            id: Uuid::new_v4(),
            sender_id: arben.id,
            sender_name: arben.name.clone(),
            text: "I can start tomorrow morning if that works for you".to_string(),
            image: None,
            timestamp: ago(25),
        },
    );

    let customer_inbox = [
        notice(
            Some(customer.id),
            UserRole::Customer,
            NotificationKind::Offer,
            "New Offer Received",
            format!("{} sent you an offer for \"{}\" - 4,500 ALL", arben.name, pipe.title),
            Some(arben.name.as_str()),
            NotificationAction::OpenGig { gig: pipe.clone() },
            150,
        ),
        notice(
            Some(customer.id),
            UserRole::Customer,
            NotificationKind::Offer,
            "New Offer Received",
            format!("{} sent you an offer for \"{}\" - 5,200 ALL", elena.name, pipe.title),
            Some(elena.name.as_str()),
            NotificationAction::OpenGig { gig: pipe.clone() },
            120,
        ),
        notice(
            Some(customer.id),
            UserRole::Customer,
            NotificationKind::Message,
            "New Message",
            "Arben: \"I can start tomorrow morning if that works for you\"".to_string(),
            Some(arben.name.as_str()),
            NotificationAction::OpenChat { other_user: arben_chat, gig: pipe.clone() },
            25,
        ),
        notice(
            Some(customer.id),
            UserRole::Customer,
            NotificationKind::Completion,
            "Job Marked Complete",
            format!("{} marked \"Paint bedroom walls\" as complete", pro.name),
            Some(pro.name.as_str()),
            NotificationAction::ShowToast { message: "This job has been completed!".to_string() },
            3 * 24 * 60,
        ),
    ];

    let kitchen = &browse_gigs[0];
    let ana_chat = ChatPartner { user_id: ana.id, user_name: ana.name.clone(), gig_id: kitchen.id };
    let labor_inbox = [
        notice(
            Some(pro.id),
            UserRole::Labor,
            NotificationKind::Message,
            "New Message",
            "Ana: \"Can you come today at 3 PM?\"".to_string(),
            Some(ana.name.as_str()),
            NotificationAction::OpenChat { other_user: ana_chat, gig: kitchen.clone() },
            40,
        ),
        notice(
            None,
            UserRole::Labor,
            NotificationKind::Gig,
            "New Gig Posted",
            format!("Plumbing job in your area - \"{}\" - Budget: 5,000 ALL", kitchen.title),
            None,
            NotificationAction::OpenScreen { screen: Screen::GigBrowser },
            55,
        ),
        notice(
            Some(pro.id),
            UserRole::Labor,
            NotificationKind::Review,
            "New Review Received",
            "Ana Krasniqi left you a 5-star review: \"Excellent work, very professional!\"".to_string(),
            Some(ana.name.as_str()),
            NotificationAction::ShowToast {
                message: "⭐ Great job! Keep up the excellent work.".to_string(),
            },
            6 * 60,
        ),
        notice(
            Some(pro.id),
            UserRole::Labor,
            NotificationKind::Credit,
            "Low Credit Alert",
            "You have 2 credits remaining. Top up to continue sending offers.".to_string(),
            None,
            NotificationAction::OpenScreen { screen: Screen::CreditManagement },
            24 * 60,
        ),
    ];

    for n in customer_inbox.into_iter().chain(labor_inbox) {
        db.save_notification(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::reviewdb::ReviewExt;
    use crate::dtos::gigdtos::GigFilterDto;

    #[test]
    fn demo_accounts_have_something_to_look_at() {
        let db = DBClient::seeded("Tirana, Albania");

        assert!(db.get_user(DEMO_CUSTOMER_ID).is_some());
        assert!(db.get_user_by_email("admin@mjeshtri.com").is_some());

        let mine = db.get_customer_gigs(DEMO_CUSTOMER_ID);
        assert_eq!(mine.len(), 3);
        assert!(mine.iter().all(|g| g.offers_consistent()));
        assert!(db.get_open_gigs(&GigFilterDto::default()).len() >= 6);

        assert_eq!(db.get_unread_count(DEMO_CUSTOMER_ID, UserRole::Customer), 4);
        assert_eq!(db.get_unread_count(DEMO_LABOR_ID, UserRole::Labor), 4);
        assert_eq!(db.get_labor_rating(DEMO_LABOR_ID), None);
    }
}

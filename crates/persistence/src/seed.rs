//! Demo catalog loaded at startup.
//!
//! Everything goes through the repositories, so seeded records obey the same
//! rules and take the same identifiers as records created later.

use domain::models::{
    DayOfWeek, NewClassSchedule, NewFacility, NewGymClass, NewMembershipPlan, NewTestimonial,
    NewTrainer, NewUser,
};

use crate::error::StoreError;
use crate::repositories::{
    ClassScheduleRepository, FacilityRepository, GymClassRepository, MembershipPlanRepository,
    TestimonialRepository, TrainerRepository, UserRepository,
};
use crate::store::{MemoryStore, StoreConfig};

const UNSPLASH: &str = "https://images.unsplash.com";

fn image(photo: &str, width: u32, height: u32) -> String {
    format!("{UNSPLASH}/{photo}?ixlib=rb-1.2.1&auto=format&fit=crop&w={width}&h={height}&q=80")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seeds plans, trainers, classes, Tuesday schedules, facilities,
/// testimonials and the demo member.
pub async fn seed_demo_data(store: &MemoryStore, config: &StoreConfig) -> Result<(), StoreError> {
    seed_membership_plans(store).await;
    let trainer_ids = seed_trainers(store).await;
    let class_ids = seed_gym_classes(store, &trainer_ids).await;
    seed_class_schedules(store, &class_ids).await?;
    seed_facilities(store).await;
    seed_testimonials(store).await?;

    UserRepository::new(store.clone())
        .create(NewUser {
            username: config.demo_username.clone(),
            password: config.demo_password.clone(),
            name: config.demo_name.clone(),
            email: config.demo_email.clone(),
        })
        .await?;

    Ok(())
}

async fn seed_membership_plans(store: &MemoryStore) {
    let repo = MembershipPlanRepository::new(store.clone());
    let plans = [
        NewMembershipPlan {
            name: "Basic Plan".to_string(),
            price: 29,
            description: "Access to gym facilities and standard equipment".to_string(),
            features: strings(&[
                "Access to gym facilities",
                "Standard gym equipment",
                "Locker access",
            ]),
            icon: "fa-dumbbell".to_string(),
            popular: false,
        },
        NewMembershipPlan {
            name: "Premium Plan".to_string(),
            price: 59,
            description: "All Basic features plus classes and training sessions".to_string(),
            features: strings(&[
                "All Basic Plan features",
                "Group fitness classes",
                "Nutrition consultation",
                "2 Personal training sessions",
            ]),
            icon: "fa-crown".to_string(),
            popular: true,
        },
        NewMembershipPlan {
            name: "Elite Plan".to_string(),
            price: 99,
            description: "Unlimited access to all premium features".to_string(),
            features: strings(&[
                "All Premium Plan features",
                "Unlimited premium classes",
                "5 Personal training sessions",
                "Monthly body assessment",
                "Priority booking for classes",
            ]),
            icon: "fa-gem".to_string(),
            popular: false,
        },
    ];

    for plan in plans {
        repo.create(plan).await;
    }
}

async fn seed_trainers(store: &MemoryStore) -> Vec<i64> {
    let repo = TrainerRepository::new(store.clone());
    let trainers = [
        ("John Davis", "HIIT Specialist", "photo-1597347343908-2937e7dcc560", "johndavis"),
        ("Sarah Chen", "Yoga Instructor", "photo-1494790108377-be9c29b29330", "sarahchen"),
        ("Mike Johnson", "Cycling Coach", "photo-1534367507873-d2d7e24c797f", "mikejohnson"),
        ("Amanda Lee", "Strength Coach", "photo-1548690312-e3b507d8c110", "amandalee"),
    ];

    let mut ids = Vec::with_capacity(trainers.len());
    for (name, speciality, photo, handle) in trainers {
        let trainer = repo
            .create(NewTrainer {
                name: name.to_string(),
                speciality: speciality.to_string(),
                image: image(photo, 400, 600),
                instagram: Some(handle.to_string()),
                facebook: Some(handle.to_string()),
                twitter: Some(handle.to_string()),
            })
            .await;
        ids.push(trainer.id);
    }
    ids
}

async fn seed_gym_classes(store: &MemoryStore, trainer_ids: &[i64]) -> Vec<i64> {
    let repo = GymClassRepository::new(store.clone());
    let classes = [
        (
            "HIIT Training",
            "High-intensity interval training combining cardio and strength exercises for maximum calorie burn.",
            45,
            "photo-1534258936925-c58bed479fcb",
            "High Intensity",
            15,
        ),
        (
            "Yoga Flow",
            "Fluid movement sequences connecting breath with movement for strength, flexibility and mindfulness.",
            60,
            "photo-1545205597-3d9d02c29597",
            "Mind & Body",
            12,
        ),
        (
            "Spin Cycle",
            "High-energy indoor cycling with motivating music and interval-based choreography for all levels.",
            50,
            "photo-1589955791915-526198ae4ee9",
            "Cardio",
            14,
        ),
        (
            "Circuit Training",
            "A form of body conditioning or resistance training using high-intensity aerobics.",
            60,
            "photo-1521805103424-d8f8430e8933",
            "Strength",
            15,
        ),
    ];

    let mut ids = Vec::with_capacity(classes.len());
    for ((name, description, duration, photo, category, price), trainer_id) in
        classes.into_iter().zip(trainer_ids.iter().copied())
    {
        let class = repo
            .create(NewGymClass {
                name: name.to_string(),
                description: description.to_string(),
                duration,
                image: image(photo, 500, 300),
                category: category.to_string(),
                price,
                trainer_id,
            })
            .await;
        ids.push(class.id);
    }
    ids
}

async fn seed_class_schedules(store: &MemoryStore, class_ids: &[i64]) -> Result<(), StoreError> {
    let repo = ClassScheduleRepository::new(store.clone());
    let slots = [
        ("07:00", "07:45", 20, 12),
        ("09:30", "10:30", 15, 8),
        ("12:00", "12:50", 20, 15),
        ("18:00", "19:00", 15, 4),
    ];

    for ((start_time, end_time, capacity, booked), class_id) in
        slots.into_iter().zip(class_ids.iter().copied())
    {
        repo.create(NewClassSchedule {
            class_id,
            day_of_week: DayOfWeek::Tuesday,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            capacity,
            booked,
        })
        .await?;
    }
    Ok(())
}

async fn seed_facilities(store: &MemoryStore) {
    let repo = FacilityRepository::new(store.clone());
    let facilities = [
        (
            "Cardio Zone",
            "State-of-the-art treadmills, ellipticals, bikes, and rowing machines with individual entertainment screens.",
            "photo-1576678927484-cc907957088c",
        ),
        (
            "Strength Area",
            "Comprehensive free weight section, power racks, and specialized machines for targeted strength training.",
            "photo-1558611848-73f7eb4001a1",
        ),
        (
            "Functional Training",
            "Open space with TRX, kettlebells, battle ropes, medicine balls, and other functional equipment.",
            "photo-1518310383802-640c2de311b6",
        ),
        (
            "Studio Rooms",
            "Dedicated spaces for group classes including yoga, spinning, HIIT, and other specialty fitness programs.",
            "photo-1518310952931-b1de897abd40",
        ),
        (
            "Recovery Zone",
            "Sauna, steam room, cold plunge, and massage therapy rooms to enhance recovery and relaxation.",
            "photo-1519823551278-64ac92734fb1",
        ),
        (
            "Locker Rooms",
            "Modern locker rooms with showers, changing areas, and amenities for comfort and convenience.",
            "photo-1593079831268-3381b0db4a77",
        ),
    ];

    for (name, description, photo) in facilities {
        repo.create(NewFacility {
            name: name.to_string(),
            description: description.to_string(),
            image: image(photo, 500, 400),
        })
        .await;
    }
}

async fn seed_testimonials(store: &MemoryStore) -> Result<(), StoreError> {
    let repo = TestimonialRepository::new(store.clone());
    let testimonials = [
        (
            "Sarah J.",
            "photo-1499952127939-9bbf5af6c51c",
            "I've lost 30 pounds since joining FlexFit! The trainers are amazing and the community keeps me motivated. Best decision I ever made.",
            "Lost 30 lbs",
            5,
            "Member for 6 months",
        ),
        (
            "Michael T.",
            "photo-1506794778202-cad84cf45f1d",
            "After trying many gyms, I finally found my home at FlexFit. The facilities are top-notch and the trainers really care about your progress.",
            "Gained 12 lbs muscle",
            4,
            "Member for 1 year",
        ),
        (
            "Emily R.",
            "photo-1580489944761-15a19d654956",
            "The yoga classes here transformed not just my body but my mind. I've never felt stronger or more centered. Worth every penny!",
            "Improved flexibility",
            5,
            "Member for 8 months",
        ),
    ];

    for (name, photo, testimonial, achievement, rating, duration) in testimonials {
        repo.create(NewTestimonial {
            name: name.to_string(),
            image: image(photo, 120, 120),
            testimonial: testimonial.to_string(),
            achievement: achievement.to_string(),
            rating,
            duration: duration.to_string(),
        })
        .await?;
    }
    Ok(())
}

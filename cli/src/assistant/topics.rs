//! # Assistant Topics and Canned Answers
//!
//! File: cli/src/assistant/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every answer the assistant can give belongs to exactly one `Topic`. The
//! answer text lives in an exhaustive `match`, so a topic without an answer
//! cannot compile and a keyword rule can never point at a missing entry.
//!
use serde::Serialize;
use std::fmt;

/// Returned when no keyword rule matches the question.
pub const FALLBACK_ANSWER: &str = "I'm your AI assistant! Ask me about my skills, work, achievements, projects, education, specializations, technologies, or how to contact me.";

/// Canonical identifier for one FAQ answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Identity,
    Skills,
    Work,
    Achievements,
    Contact,
    Projects,
    Education,
    Specializations,
    Technologies,
}

/// A topic paired with the text shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEntry {
    pub topic: Topic,
    pub answer: &'static str,
}

impl Topic {
    pub const ALL: [Topic; 9] = [
        Topic::Identity,
        Topic::Skills,
        Topic::Work,
        Topic::Achievements,
        Topic::Contact,
        Topic::Projects,
        Topic::Education,
        Topic::Specializations,
        Topic::Technologies,
    ];

    /// Stable key used in the JSON API and `folio topics` output.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Identity => "identity",
            Topic::Skills => "skills",
            Topic::Work => "work",
            Topic::Achievements => "achievements",
            Topic::Contact => "contact",
            Topic::Projects => "projects",
            Topic::Education => "education",
            Topic::Specializations => "specializations",
            Topic::Technologies => "technologies",
        }
    }

    /// A sample question for the topic, suggested in the chat UI.
    pub fn sample_question(self) -> &'static str {
        match self {
            Topic::Identity => "Who are you?",
            Topic::Skills => "What skills do you have?",
            Topic::Work => "What work do you do?",
            Topic::Achievements => "What are your achievements?",
            Topic::Contact => "How to contact you?",
            Topic::Projects => "What projects have you built?",
            Topic::Education => "Where do you study?",
            Topic::Specializations => "What do you focus on?",
            Topic::Technologies => "Which technologies do you use?",
        }
    }

    pub fn answer(self) -> &'static str {
        match self {
            Topic::Identity => "I'm Manish Sahu, a B.Tech Computer Science student from Udaipur, passionate about DevOps, Cloud Computing, and AI/ML. I specialize in AWS, automation, and scalable deployments. I have 5+ projects, 4+ certifications, and work with 10+ technologies.",
            Topic::Skills => "My technical skills include: Languages (Python, SQL, C++, C, HTML, CSS), Tools (Docker, GitHub, pandas, Jenkins, Streamlit, NumPy, boto3, Prometheus), and Platforms & DevOps (Linux, AWS, CI/CD, IoT, Kubernetes, Ansible). I'm also experienced with computer vision, gesture recognition, and automation.",
            Topic::Work => "I work on cloud automation, DevOps pipelines, AI/ML projects, and scalable application deployments. My projects include hand gesture-controlled AWS instance management, Flask CI/CD with Docker & Kubernetes, IoT milk adulteration detection, GenAI bug fixing tools, and multicontainer microservices. I build solutions using AWS, Docker, Jenkins, and Python.",
            Topic::Achievements => "I've won multiple hackathons including NutriScan (Hackathon Winner), am an AWS Cloud Practitioner, and have certifications in SQL and GenAI. I've also led cloud and social media initiatives. I have 3+ awards and specialize in innovative automation solutions.",
            Topic::Contact => "You can contact me at manishsahu81128@gmail.com or via LinkedIn: https://www.linkedin.com/in/manish-sahu99/. I'm currently open to work and available for new opportunities.",
            Topic::Projects => "My featured projects include: 1) Hand Gesture-Controlled AWS Instance Management (OpenCV + Boto3), 2) AWS EC2 Automation via API Gateway & Lambda, 3) Flask App CI/CD with Docker, Jenkins & Kubernetes, 4) GenAI Bug Fixing Tool, 5) GenAI AWS Expert Advisor, 6) NutriScan (Hackathon Winner), 7) Milk Adulteration Detection IoT, 8) Multicontainer Microservices, and 9) Event-Driven Architecture on AWS. I also have minor projects in Docker and Python automation.",
            Topic::Education => "I'm currently pursuing B.Tech in Computer Science. I'm based in Udaipur, India and passionate about bridging the gap between development and operations by delivering reliable, production-ready solutions.",
            Topic::Specializations => "I specialize in DevOps Engineering, AWS Cloud Computing, AI/ML development, and automation. My mission is to bridge the gap between development and operations by delivering reliable, production-ready solutions with speed and precision.",
            Topic::Technologies => "I work with Python, Docker, Jenkins, AWS (EC2, Lambda, S3, SNS), Linux, CI/CD, SQL, C++, HTML, CSS, pandas, Streamlit, NumPy, boto3, OpenCV, Kubernetes, Ansible, and various automation tools. I'm experienced in computer vision, gesture recognition, and IoT applications.",
        }
    }

    pub fn entry(self) -> ResponseEntry {
        ResponseEntry {
            topic: self,
            answer: self.answer(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All response entries, in declaration order.
pub fn responses() -> impl Iterator<Item = ResponseEntry> {
    Topic::ALL.into_iter().map(Topic::entry)
}

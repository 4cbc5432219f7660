//! Authored portfolio content.

use super::{
    Achievement, AchievementKind, Hobby, Portfolio, Profile, Project, ProjectGroup, Skill,
    SkillCategory, SocialLink, Stat,
};

const GITHUB: &str = "https://github.com/Manishsahu2003";

pub(super) static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Manish Sahu",
        location: "Udaipur, India",
        roles: &["DevOps Engineer", "Cloud Computing", "AI/ML Enthusiast", "Automation"],
        open_to_work: true,
        bio: &[
            "I'm Manish Sahu, a B.Tech Computer Science student based in Udaipur with a strong passion for DevOps, Cloud Computing, and AI/ML.",
            "I specialize in deploying scalable applications using AWS services and automating workflows with tools like Jenkins, Docker, and GitHub Actions.",
            "I have hands-on experience working with Linux environments, writing efficient Python scripts, and building interactive dashboards using pandas and Streamlit.",
        ],
        mission: "To bridge the gap between development and operations by delivering reliable, production-ready solutions with speed and precision.",
        stats: &[
            Stat { value: "5+", label: "Projects" },
            Stat { value: "4+", label: "Certifications" },
            Stat { value: "10+", label: "Technologies" },
            Stat { value: "3+", label: "Awards" },
        ],
        highlights: &["DevOps Engineer", "AWS Specialist", "AI/ML Enthusiast", "Automation Expert"],
        email: "manishsahu81128@gmail.com",
    },
    skills: &[
        SkillCategory {
            title: "Languages",
            skills: &[
                Skill { name: "Python", percentage: 92 },
                Skill { name: "SQL", percentage: 83 },
                Skill { name: "C++", percentage: 74 },
                Skill { name: "C", percentage: 70 },
                Skill { name: "HTML", percentage: 90 },
                Skill { name: "CSS", percentage: 88 },
            ],
        },
        SkillCategory {
            title: "Tools",
            skills: &[
                Skill { name: "Docker", percentage: 90 },
                Skill { name: "GitHub", percentage: 88 },
                Skill { name: "pandas", percentage: 86 },
                Skill { name: "Jenkins", percentage: 85 },
                Skill { name: "Streamlit", percentage: 80 },
                Skill { name: "NumPy", percentage: 75 },
            ],
        },
        SkillCategory {
            title: "Platforms & DevOps",
            skills: &[
                Skill { name: "Linux", percentage: 95 },
                Skill { name: "AWS", percentage: 85 },
                Skill { name: "CI/CD", percentage: 80 },
                Skill { name: "IoT", percentage: 78 },
            ],
        },
    ],
    achievements: &[
        Achievement {
            title: "AWS Cloud Practitioner",
            description: "Certified AWS Cloud Practitioner with comprehensive knowledge of cloud computing fundamentals and AWS services.",
            kind: AchievementKind::Certification,
        },
        Achievement {
            title: "SQL Certification",
            description: "Advanced SQL certification demonstrating expertise in database management and complex query optimization.",
            kind: AchievementKind::Certification,
        },
        Achievement {
            title: "GenAI by GDG",
            description: "Specialized certification in Generative AI technologies and implementation strategies from Google Developer Group.",
            kind: AchievementKind::Certification,
        },
        Achievement {
            title: "Hackathon Participation",
            description: "Active participant in multiple hackathons, contributing to innovative solutions and collaborative development.",
            kind: AchievementKind::Certification,
        },
        Achievement {
            title: "Winner – CodeFiest 3.0",
            description: "First place winner at CodeFiest 3.0 competition, demonstrating exceptional coding skills and problem-solving abilities.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "Winner – HackITSpapiens",
            description: "Champion at HackITSpapiens hackathon, developing innovative solutions within tight deadlines.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "Group Decision Winner",
            description: "Excellence in team collaboration and decision-making in competitive group challenges.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "Runner-up – SPSU Ideathon",
            description: "Second place at SPSU Ideathon, showcasing innovative ideas and implementation strategies.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "Gold Medalist",
            description: "Achieved gold medal recognition for outstanding academic and project performance.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "AWS Cloud Lead",
            description: "Leadership role in AWS Cloud initiatives, mentoring teams and driving cloud adoption strategies.",
            kind: AchievementKind::Achievement,
        },
        Achievement {
            title: "Social Media Lead at CII",
            description: "Led social media initiatives at Confederation of Indian Industry, managing digital presence and engagement.",
            kind: AchievementKind::Achievement,
        },
    ],
    projects: &[
        Project {
            title: "Hand Gesture-Controlled AWS Instance Management",
            description: "Innovative system that uses hand gestures to control AWS EC2 instances. Python application with OpenCV for gesture recognition and Boto3 for AWS integration. Users can launch or stop instances using simple hand movements, demonstrating advanced automation and human-computer interaction.",
            tech_stack: &["Python", "OpenCV", "Boto3", "AWS EC2", "Gesture Recognition", "Computer Vision"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "AWS EC2 Automation via API Gateway & Lambda",
            description: "Built a serverless automation pipeline where AWS API Gateway receives HTTP requests and triggers a Lambda function (Python + boto3) to launch EC2 instances in real time. Demonstrates event-driven, scalable cloud infrastructure using serverless AWS components.",
            tech_stack: &["AWS Lambda", "API Gateway", "Python", "boto3", "EC2", "Serverless"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "Flask App CI/CD with Docker, Jenkins & Kubernetes",
            description: "Developed a Flask-based Python application, containerized it with Docker, and implemented a robust CI/CD pipeline using GitHub, Jenkins, Docker Hub, and Kubernetes. Automated build, test, and deployment workflows, with Kubernetes managing scalable deployments and service exposure on Port 5000.",
            tech_stack: &["Python", "Flask", "Docker", "Jenkins", "Docker Hub", "Kubernetes", "GitHub"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "EC2 Instance Manager",
            description: "Flask API application for launching and managing AWS EC2 instances using Python boto3 library. Features instance creation, monitoring, and automated scaling.",
            tech_stack: &["Python", "Flask", "boto3", "AWS EC2", "REST API"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "CI/CD Automation Pipeline",
            description: "End-to-end CI/CD pipeline using GitHub Actions, Jenkins, and Docker. Automated testing, building, and deployment to AWS EC2.",
            tech_stack: &["Jenkins", "Docker", "GitHub Actions", "AWS", "Terraform"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "Flask App Deployed on AWS",
            description: "Full-stack web application deployed on AWS with automated CI/CD pipeline, load balancing, and auto-scaling capabilities.",
            tech_stack: &["Flask", "AWS", "Docker", "Jenkins", "EC2", "RDS"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "GenAI Bug Fixing Tool",
            description: "AI-powered tool that automatically detects and suggests fixes for common programming bugs using generative AI models.",
            tech_stack: &["Python", "OpenAI API", "FastAPI", "React", "Docker"],
            github_url: GITHUB,
            domain: "AI/ML & Data Science",
        },
        Project {
            title: "GenAI AWS Expert Advisor",
            description: "Developed an AWS Expert Advisor using OpenAI and Gemini APIs. The system performs AWS web scraping and leverages GenAI to provide expert recommendations and insights for AWS users.",
            tech_stack: &["OpenAI API", "Gemini", "Python", "Web Scraping", "AWS", "GenAI"],
            github_url: GITHUB,
            domain: "AI/ML & Data Science",
        },
        Project {
            title: "Cab Fare Prediction Model",
            description: "Machine learning model to predict cab fares based on various parameters like distance, time, weather conditions, and traffic.",
            tech_stack: &["Python", "Scikit-learn", "Pandas", "NumPy", "Jupyter"],
            github_url: GITHUB,
            domain: "AI/ML & Data Science",
        },
        Project {
            title: "NutriScan – Hackathon Winner",
            description: "Award-winning nutrition analysis application that scans food items and provides detailed nutritional information using computer vision.",
            tech_stack: &["Python", "OpenCV", "Flask", "Machine Learning", "API"],
            github_url: GITHUB,
            domain: "IoT & Automation",
        },
        Project {
            title: "Milk Adulteration Detection IoT",
            description: "IoT-based system to detect milk adulteration using sensors and machine learning algorithms. Real-time monitoring with data analytics dashboard.",
            tech_stack: &["IoT", "Python", "Machine Learning", "Streamlit", "Arduino"],
            github_url: GITHUB,
            domain: "IoT & Automation",
        },
        Project {
            title: "Multicontainer Microservices for Flask App",
            description: "Designed and implemented a microservices architecture using Docker Compose. The system includes separate Flask-based User Registration and User Details services, each running in its own container, with Postgres and Redis as backend services. All containers communicate over a Docker network, demonstrating scalable, modular DevOps practices.",
            tech_stack: &["Flask", "Docker", "Docker Compose", "Microservices", "Postgres", "Redis"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
        Project {
            title: "Event-Driven Architecture on AWS",
            description: "Implemented an event-driven architecture using AWS services. File uploads to an S3 bucket trigger Lambda functions, which process the event and invoke AWS SNS to send notifications. This project demonstrates automation, real-time processing, and scalable cloud-native design.",
            tech_stack: &["AWS S3", "AWS Lambda", "AWS SNS", "Event-Driven", "Automation"],
            github_url: GITHUB,
            domain: "Cloud & DevOps",
        },
    ],
    minor_projects: &[
        ProjectGroup {
            name: "Docker",
            projects: &[
                Project {
                    title: "Docker Process Management",
                    description: "Containerized application deployment and process management using Docker. Includes multi-stage builds and container orchestration.",
                    tech_stack: &["Docker", "Docker Compose", "Containerization", "Process Management"],
                    github_url: GITHUB,
                    domain: "DevOps & Containerization",
                },
                Project {
                    title: "Firefox Setup in Docker",
                    description: "Containerized Firefox browser setup with custom configurations and extensions for automated testing and development environments.",
                    tech_stack: &["Docker", "Firefox", "Browser Automation", "Containerization"],
                    github_url: GITHUB,
                    domain: "DevOps & Containerization",
                },
            ],
        },
        ProjectGroup {
            name: "Python",
            projects: &[
                Project {
                    title: "WhatsApp Message Automation",
                    description: "Python script to send automated WhatsApp messages using web APIs and selenium for business communication and notifications.",
                    tech_stack: &["Python", "Selenium", "WhatsApp API", "Automation"],
                    github_url: GITHUB,
                    domain: "Automation & Scripting",
                },
                Project {
                    title: "Email Automation System",
                    description: "Automated email sending system with templates, scheduling, and bulk email capabilities for marketing and notifications.",
                    tech_stack: &["Python", "SMTP", "Email Templates", "Automation"],
                    github_url: GITHUB,
                    domain: "Automation & Scripting",
                },
                Project {
                    title: "Phone Call Automation",
                    description: "Automated phone calling system using Python with voice synthesis and call management for customer service automation.",
                    tech_stack: &["Python", "Twilio", "Voice API", "Call Automation"],
                    github_url: GITHUB,
                    domain: "Automation & Scripting",
                },
                Project {
                    title: "Instagram Post Automation",
                    description: "Automated Instagram posting system with image processing, caption generation, and scheduled posting capabilities.",
                    tech_stack: &["Python", "Instagram API", "Image Processing", "Social Media Automation"],
                    github_url: GITHUB,
                    domain: "Automation & Scripting",
                },
            ],
        },
    ],
    hobbies: &[
        Hobby {
            name: "Playing Cricket",
            description: "Passionate about cricket, love playing with friends and following international matches. Great for teamwork and strategy.",
        },
        Hobby {
            name: "Traveling",
            description: "Exploring new places and cultures. Travel helps me gain new perspectives and inspiration for my work.",
        },
        Hobby {
            name: "Exploring New Tech",
            description: "Always curious about the latest technology trends, frameworks, and tools. Continuous learning is my passion.",
        },
        Hobby {
            name: "Quick Projects",
            description: "Building small projects and prototypes to experiment with new ideas and technologies in my free time.",
        },
    ],
    social_links: &[
        SocialLink {
            name: "LinkedIn",
            url: "https://www.linkedin.com/in/manish-sahu99/",
        },
        SocialLink {
            name: "GitHub",
            url: GITHUB,
        },
        SocialLink {
            name: "Email",
            url: "mailto:manishsahu81128@gmail.com",
        },
    ],
};

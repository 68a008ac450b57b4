pub const OWNER_NAME: &str = "Jihen Jabeur";
pub const TAGLINE: &str = "Full-Stack Developer | DevOps-Minded";

pub const GITHUB_URL: &str = "https://github.com/JihenJabeur02";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jihen-jabeur-1170702a2/";
pub const EMAIL_ADDRESS: &str = "jihenjabeur7@gmail.com";

pub const ABOUT_ME: &str =
    "I am an Industrial Engineering student at ENET'COM with a strong passion for software \
     engineering and process optimization. I started by developing web, desktop, and mobile \
     applications to enhance industrial and administrative performance. Later, I specialized in \
     creating automation scripts and testing tools, diving deeper into validation and quality \
     assurance. Currently, I am expanding my skills toward embedded systems and exploring the \
     integration of AI technologies to develop smarter, adaptive industrial solutions. Throughout \
     my projects, I have honed strong teamwork and time management abilities, and I regularly work \
     with DevOps tools to ensure efficient development, deployment, and collaboration.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechLogo {
    Css,
    Html,
    Java,
    JavaScript,
    Python,
    React,
    Node,
    Docker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    /// Self-assessed proficiency, percent.
    pub rate: u8,
    pub logo: TechLogo,
}

pub const TECHNOLOGIES: [Technology; 8] = [
    Technology { name: "CSS", rate: 90, logo: TechLogo::Css },
    Technology { name: "HTML", rate: 90, logo: TechLogo::Html },
    Technology { name: "Java", rate: 70, logo: TechLogo::Java },
    Technology { name: "JavaScript", rate: 70, logo: TechLogo::JavaScript },
    Technology { name: "Python", rate: 80, logo: TechLogo::Python },
    Technology { name: "React", rate: 70, logo: TechLogo::React },
    Technology { name: "Node.js", rate: 60, logo: TechLogo::Node },
    Technology { name: "Docker", rate: 60, logo: TechLogo::Docker },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u8,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
    pub write_up: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Automated PDF Management and Data Synchronization System",
        summary: "Automated desktop solution synchronizing administrative documents between GPC and STEG, reducing manual effort.",
        icon: "📝",
        write_up: "https://drive.google.com/file/d/1OE03ZK7oo465hSDsaiwK0yY5ra7F8ito/view?usp=drive_link",
    },
    Project {
        id: 2,
        title: "Industrial Product Monitoring Platform",
        summary: "Real-time platform visualizing machine performance and enabling predictive maintenance for improved efficiency.",
        icon: "📚",
        write_up: "https://drive.google.com/file/d/12muWD0Y9abJ6YENT-qPXLxisbkq-2sdY/view?usp=sharing",
    },
    Project {
        id: 3,
        title: "Smart Product Exchange Platform",
        summary: "Smart IoT web platform enabling real-time product exchange and autonomous industrial transport.",
        icon: "🤖",
        write_up: "https://drive.google.com/file/d/1E4GeiEDDJR4mOMBl3x6eoFhH918Dl-_A/view?usp=sharing",
    },
    Project {
        id: 4,
        title: "Automated Tool for Transforming AndiSDK Protocol Tests into PcapPlusPlus Scripts",
        summary: "Automation tool converting AndiSDK test data into executable PcapPlusPlus scripts for streamlined debugging.",
        icon: "🌐",
        write_up: "https://drive.google.com/file/d/1i0bsEPgzwREBNp4CDOf9zzdSX2k6SpfJ/view?usp=sharing",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudyEntry {
    pub title: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const STUDIES: [StudyEntry; 4] = [
    StudyEntry {
        title: "Industrial Computer Engineering Student",
        school: "National School of Electronics and Telecommunications of Sfax, Tunisia",
        period: "2023 - Present",
    },
    StudyEntry {
        title: "Preparatory Cycle in Physics and Chemistry",
        school: "Faculty of Sciences of Sfax, Tunisia",
        period: "2020 - 2023",
    },
    StudyEntry {
        title: "Microsoft Certified: Azure AI Fundamentals",
        school: "Microsoft Certification – Cloud & AI Services",
        period: "December 2024",
    },
    StudyEntry {
        title: "DevOps & Fullstack Bootcamp",
        school: "SIP Academy – Spring Boot, Angular, and DevOps (Jenkins, CI/CD, Docker, GitHub, GitLab, Postman, JUnit5, etc.)",
        period: "Summer 2025",
    },
];

pub struct ResumeCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: crate::utils::SectionId,
}

pub const RESUME_CARDS: [ResumeCard; 3] = [
    ResumeCard {
        title: "Technologies",
        description: "Tools I master and the tech I explore — from front-end frameworks to DevOps pipelines.",
        target: crate::utils::SectionId::Technologies,
    },
    ResumeCard {
        title: "Projects",
        description: "Real-world challenges turned into digital solutions across industries — take a look!",
        target: crate::utils::SectionId::Projects,
    },
    ResumeCard {
        title: "Study",
        description: "Here’s how my education powers my code.",
        target: crate::utils::SectionId::Study,
    },
];

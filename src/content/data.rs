use chrono::NaiveDate;

use crate::models::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literals below are valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    tags(values)
}

pub(super) fn profile() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        headline: "Machine learning engineer & full-stack developer".to_string(),
        bio: "I build applied machine learning systems and the web products around them, \
              from data pipelines and model serving to the interfaces people actually use."
            .to_string(),
        email: "hello@alexmorgan.dev".to_string(),
        location: "Toronto, Canada".to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/alexmorgan".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/alexmorgan".to_string(),
            },
        ],
        taglines: strings(&[
            "Machine learning engineer",
            "Full-stack developer",
            "Research enthusiast",
        ]),
    }
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "neural-search".to_string(),
            title: "Neural Search".to_string(),
            summary: "Semantic document retrieval with dense embeddings and a hybrid BM25 reranker."
                .to_string(),
            tags: strings(&["AI", "Search"]),
            tech: strings(&["Python", "PyTorch", "FAISS"]),
            repo_url: Some("https://github.com/alexmorgan/neural-search".to_string()),
            demo_url: None,
            featured: true,
            year: 2024,
        },
        Project {
            slug: "cardio-watch".to_string(),
            title: "CardioWatch".to_string(),
            summary: "Arrhythmia detection from single-lead ECG recordings on wearable hardware."
                .to_string(),
            tags: strings(&["AI", "Health", "Embedded"]),
            tech: strings(&["Python", "TensorFlow Lite", "C"]),
            repo_url: Some("https://github.com/alexmorgan/cardio-watch".to_string()),
            demo_url: None,
            featured: true,
            year: 2023,
        },
        Project {
            slug: "portfolio".to_string(),
            title: "Portfolio".to_string(),
            summary: "This site: server-rendered pages with an ambient procedural background."
                .to_string(),
            tags: strings(&["Web"]),
            tech: strings(&["Rust", "axum"]),
            repo_url: Some("https://github.com/alexmorgan/portfolio".to_string()),
            demo_url: Some("https://alexmorgan.dev".to_string()),
            featured: false,
            year: 2024,
        },
        Project {
            slug: "genome-viz".to_string(),
            title: "Genome Viz".to_string(),
            summary: "Interactive browser for variant calls with a zoomable helix overview."
                .to_string(),
            tags: strings(&["Health", "Web", "Visualization"]),
            tech: strings(&["TypeScript", "D3", "WebGL"]),
            repo_url: Some("https://github.com/alexmorgan/genome-viz".to_string()),
            demo_url: Some("https://genome-viz.alexmorgan.dev".to_string()),
            featured: false,
            year: 2022,
        },
        Project {
            slug: "lecture-notes-llm".to_string(),
            title: "Lecture Notes LLM".to_string(),
            summary: "Summarises recorded lectures into structured study notes with citations."
                .to_string(),
            tags: strings(&["AI", "Education", "Web"]),
            tech: strings(&["Python", "FastAPI", "React"]),
            repo_url: Some("https://github.com/alexmorgan/lecture-notes-llm".to_string()),
            demo_url: None,
            featured: true,
            year: 2024,
        },
        Project {
            slug: "transit-pulse".to_string(),
            title: "Transit Pulse".to_string(),
            summary: "Real-time city transit delays dashboard fed by GTFS-realtime streams."
                .to_string(),
            tags: strings(&["Data", "Web"]),
            tech: strings(&["Go", "PostgreSQL", "Svelte"]),
            repo_url: Some("https://github.com/alexmorgan/transit-pulse".to_string()),
            demo_url: None,
            featured: false,
            year: 2021,
        },
        Project {
            slug: "retina-grader".to_string(),
            title: "Retina Grader".to_string(),
            summary: "Diabetic retinopathy grading from fundus photographs with saliency maps."
                .to_string(),
            tags: strings(&["AI", "Health", "Vision"]),
            tech: strings(&["Python", "PyTorch"]),
            repo_url: None,
            demo_url: None,
            featured: false,
            year: 2023,
        },
        Project {
            slug: "ledger-cli".to_string(),
            title: "Ledger CLI".to_string(),
            summary: "Plain-text double-entry bookkeeping tool with import rules.".to_string(),
            tags: strings(&["Tools"]),
            tech: strings(&["Rust"]),
            repo_url: Some("https://github.com/alexmorgan/ledger-cli".to_string()),
            demo_url: None,
            featured: false,
            year: 2020,
        },
        Project {
            slug: "campus-events".to_string(),
            title: "Campus Events".to_string(),
            summary: "Event discovery app for student societies with calendar sync.".to_string(),
            tags: strings(&["Web", "Mobile"]),
            tech: strings(&["Kotlin", "Firebase"]),
            repo_url: None,
            demo_url: None,
            featured: false,
            year: 2019,
        },
    ]
}

pub(super) fn experience() -> Vec<ExperienceRole> {
    vec![
        ExperienceRole {
            slug: "northwind-ml".to_string(),
            company: "Northwind Health".to_string(),
            title: "Machine Learning Engineer".to_string(),
            summary: "Own the model serving platform for clinical decision support.".to_string(),
            start: date(2022, 9, 1),
            end: None,
            tags: strings(&["AI", "Health", "Infrastructure"]),
            highlights: strings(&[
                "Cut inference latency by 60% by moving to batched GPU serving",
                "Introduced offline evaluation gates for every model release",
            ]),
        },
        ExperienceRole {
            slug: "brightlabs-fullstack".to_string(),
            company: "BrightLabs".to_string(),
            title: "Full-Stack Developer".to_string(),
            summary: "Built customer dashboards and the data APIs behind them.".to_string(),
            start: date(2020, 6, 1),
            end: Some(date(2022, 8, 31)),
            tags: strings(&["Web", "Data"]),
            highlights: strings(&[
                "Shipped a reporting product used by 300+ customers",
                "Migrated the frontend to a typed component library",
            ]),
        },
        ExperienceRole {
            slug: "uni-research-assistant".to_string(),
            company: "University Vision Lab".to_string(),
            title: "Research Assistant".to_string(),
            summary: "Medical image segmentation research under a faculty supervisor.".to_string(),
            start: date(2019, 1, 1),
            end: Some(date(2020, 5, 31)),
            tags: strings(&["AI", "Research", "Vision"]),
            highlights: strings(&["Co-authored a workshop paper on retinal vessel segmentation"]),
        },
    ]
}

fn skill(name: &str, category: SkillCategory, level: u8, skill_tags: &[&str]) -> Skill {
    Skill {
        name: name.to_string(),
        category,
        level,
        tags: strings(skill_tags),
    }
}

pub(super) fn skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        skill("Python", Languages, 5, &["AI", "Data"]),
        skill("Rust", Languages, 4, &["Systems"]),
        skill("TypeScript", Languages, 4, &["Web"]),
        skill("PyTorch", MachineLearning, 5, &["AI"]),
        skill("Computer Vision", MachineLearning, 4, &["AI", "Vision"]),
        skill("NLP", MachineLearning, 4, &["AI"]),
        skill("React", Web, 4, &["Web"]),
        skill("axum", Web, 3, &["Web", "Systems"]),
        skill("Docker", Infrastructure, 4, &["DevOps"]),
        skill("Kubernetes", Infrastructure, 3, &["DevOps"]),
        skill("Git", Tools, 5, &["DevOps"]),
    ]
}

pub(super) fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            slug: "aws-ml-specialty".to_string(),
            title: "AWS Certified Machine Learning – Specialty".to_string(),
            issuer: "Amazon Web Services".to_string(),
            issued: date(2023, 3, 14),
            credential_url: None,
            tags: strings(&["AI", "Cloud"]),
        },
        Certification {
            slug: "ckad".to_string(),
            title: "Certified Kubernetes Application Developer".to_string(),
            issuer: "Cloud Native Computing Foundation".to_string(),
            issued: date(2022, 11, 2),
            credential_url: None,
            tags: strings(&["DevOps", "Cloud"]),
        },
    ]
}

pub(super) fn scholarships() -> Vec<Scholarship> {
    vec![
        Scholarship {
            slug: "deans-excellence".to_string(),
            title: "Dean's Excellence Scholarship".to_string(),
            awarder: "Faculty of Engineering".to_string(),
            year: 2018,
            summary: "Awarded for academic standing in the top 2% of the cohort.".to_string(),
            tags: strings(&["Academic"]),
        },
        Scholarship {
            slug: "women-in-ai".to_string(),
            title: "AI Research Travel Award".to_string(),
            awarder: "Canadian AI Association".to_string(),
            year: 2019,
            summary: "Funded attendance at an international machine learning workshop."
                .to_string(),
            tags: strings(&["AI", "Research"]),
        },
    ]
}

pub(super) fn posts() -> Vec<BlogPostMeta> {
    vec![
        BlogPostMeta {
            slug: "serving-models-at-low-latency".to_string(),
            title: "Serving models at low latency".to_string(),
            summary: "What moved the needle when we took p99 inference from 400ms to 150ms."
                .to_string(),
            published: date(2024, 5, 12),
            updated: Some(date(2024, 6, 1)),
            tags: strings(&["AI", "Infrastructure"]),
            reading_minutes: 9,
        },
        BlogPostMeta {
            slug: "ecg-on-a-microcontroller".to_string(),
            title: "Running an ECG classifier on a microcontroller".to_string(),
            summary: "Quantisation, feature windows and the memory budget of a wearable."
                .to_string(),
            published: date(2023, 10, 3),
            updated: None,
            tags: strings(&["AI", "Health", "Embedded"]),
            reading_minutes: 12,
        },
        BlogPostMeta {
            slug: "reduced-motion-matters".to_string(),
            title: "Designing animated backgrounds that respect reduced motion".to_string(),
            summary: "A procedural background that degrades to a single static frame."
                .to_string(),
            published: date(2024, 8, 20),
            updated: None,
            tags: strings(&["Web", "Accessibility"]),
            reading_minutes: 6,
        },
    ]
}

//! Marketing copy for the landing sections

pub const BRAND: &str = "Axiom";

/// Section heading with its lead paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionIntro {
    pub heading: &'static str,
    pub lead: &'static str,
}

pub const HERO_HEADLINE: (&str, &str) = ("Automate Everything with", "AI Agents");

pub const HERO_LEAD: &str = "Transform your business with intelligent automation. Our AI agents handle repetitive tasks, streamline workflows, and boost productivity while you focus on what matters most.";

pub const BENEFITS_INTRO: SectionIntro = SectionIntro {
    heading: "Why Choose Axiom?",
    lead: "Join thousands of professionals who've transformed their workflows with intelligent automation",
};

pub const HOW_IT_WORKS_INTRO: SectionIntro = SectionIntro {
    heading: "How It Works",
    lead: "From concept to autonomous execution in three simple steps.",
};

/// Headings of the three staged form pages
pub const STAGED_STEP_INTROS: [SectionIntro; 3] = [
    SectionIntro {
        heading: "Tell us about yourself",
        lead: "Help us understand your background",
    },
    SectionIntro {
        heading: "Your automation needs",
        lead: "Help us understand how you'll use Axiom",
    },
    SectionIntro {
        heading: "Final details",
        lead: "Just a few more questions to personalize your experience",
    },
];

pub const FOOTER_BLURB: &str =
    "Intelligent automation for teams that would rather build than babysit spreadsheets.";

/// Card in the hero highlight row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tint: &'static str,
}

pub const HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        emoji: "🤖",
        title: "Smart Automation",
        description: "AI-powered agents that learn and adapt to your workflows",
        tint: "bg-emerald-100",
    },
    Highlight {
        emoji: "⚡",
        title: "Lightning Fast",
        description: "Process thousands of tasks in minutes, not hours",
        tint: "bg-blue-100",
    },
    Highlight {
        emoji: "🎯",
        title: "Precision Accuracy",
        description: "99.9% accuracy with continuous learning capabilities",
        tint: "bg-purple-100",
    },
];

/// Benefit card; `icon` names an asset under `/icons`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "clock",
        title: "Save 10+ Hours Weekly",
        description: "Automate repetitive tasks and focus on strategic work that drives real growth.",
    },
    Benefit {
        icon: "lightning",
        title: "Lightning Fast Setup",
        description: "Get your first automation running in under 5 minutes with our intuitive interface.",
    },
    Benefit {
        icon: "shield",
        title: "Enterprise Security",
        description: "Bank-grade encryption and compliance standards keep your data protected.",
    },
    Benefit {
        icon: "trending-up",
        title: "Scale Without Limits",
        description: "Handle increasing workloads effortlessly as your business grows.",
    },
];

/// Numbered step in the "how it works" section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HowItWorksStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        icon: "message-square",
        title: "Tell us what you want",
        description: "Describe your workflow challenges and automation goals. Our team understands your unique needs.",
        gradient: "from-blue-500 to-indigo-500",
    },
    HowItWorksStep {
        icon: "bot",
        title: "We create or deploy the right agent",
        description: "Our experts build custom agents tailored to your processes, or configure existing solutions.",
        gradient: "from-emerald-500 to-teal-500",
    },
    HowItWorksStep {
        icon: "check-circle",
        title: "It runs quietly and gets things done",
        description: "Your agent executes tasks autonomously, learns from patterns, and improves over time.",
        gradient: "from-purple-500 to-pink-500",
    },
];

/// Status-dependent copy of the calls to action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub button: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub perks: [&'static str; 3],
    pub nav_button: &'static str,
}

const JOIN: CallToAction = CallToAction {
    button: "Join the Waitlist",
    heading: "Ready to Automate Everything?",
    body: "Join the waitlist for early access to Axiom. Limited spots available for our exclusive beta program.",
    perks: ["Free early access", "Priority support", "50% discount"],
    nav_button: "Join Waitlist",
};

const MEMBER: CallToAction = CallToAction {
    button: "Try out MVP",
    heading: "Ready to Try Our MVP?",
    body: "You're already on our waitlist! Try out our MVP and experience the future of automation.",
    perks: ["MVP access", "Priority support", "Full features"],
    nav_button: "Early Access Reserved",
};

impl CallToAction {
    pub fn for_status(on_waitlist: bool) -> Self {
        if on_waitlist { MEMBER } else { JOIN }
    }
}

/// Footer link column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Product",
        links: &[
            ("Benefits", "#benefits"),
            ("How It Works", "#how-it-works"),
            ("Join Waitlist", "#waitlist"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            ("Privacy", "/privacy"),
            ("Terms", "/terms"),
            ("Contact", "mailto:hello@axiom.dev"),
        ],
    },
];

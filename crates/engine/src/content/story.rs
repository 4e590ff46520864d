//! The branching storyline, starting at `intro`.

use hacktycoon_domain::{
    EndingType, MissionType, Requirement, Skill, StoryChoice, StoryNode,
};

use EndingType::{Bad, Good, Neutral};
use StoryChoice as Choice;

pub const START_NODE: &str = "intro";

fn level(value: u32) -> Requirement {
    Requirement::Level { value }
}

fn money(value: u64) -> Requirement {
    Requirement::Money { value }
}

fn heat(max: u32) -> Requirement {
    Requirement::Heat { max }
}

fn illegal_missions(count: u32) -> Requirement {
    Requirement::Missions {
        mission_type: MissionType::Illegal,
        count,
    }
}

pub fn nodes() -> Vec<StoryNode> {
    let mut nodes = chapters();
    nodes.extend(endings());
    nodes
}

fn chapters() -> Vec<StoryNode> {
    vec![
        StoryNode::chapter(
            "intro",
            "The Beginning",
            "You sit in your dimly lit apartment, the glow of multiple monitors illuminating your face. A mysterious message appears on your screen...",
            vec![
                Choice::open("Investigate the message", "mysterious_contact"),
                Choice::open("Ignore it and continue your work", "solo_path"),
            ],
        ),
        StoryNode::chapter(
            "mysterious_contact",
            "The Contact",
            "\"I know who you are,\" the message reads. \"I have a proposition. The corporation you used to work for is hiding something big. Help me expose them, and we both benefit.\"",
            vec![
                Choice::open("Accept the offer - Fight the corporation", "vigilante_path"),
                Choice::open("Report this to authorities", "lawful_path"),
                Choice::gated(
                    "Blackmail them instead",
                    "criminal_path",
                    Requirement::Skill {
                        skill: Skill::Social,
                        value: 7,
                    },
                ),
            ],
        ),
        StoryNode::chapter(
            "solo_path",
            "The Lone Wolf",
            "You decide to forge your own path. No mysterious contacts, no grand conspiracies. Just you and your skills against the world.",
            vec![
                Choice::open("Focus on legal consulting work", "freelancer_path"),
                Choice::gated("Build your own hacking empire", "empire_path", level(5)),
            ],
        ),
        StoryNode::chapter(
            "vigilante_path",
            "Digital Vigilante",
            "You join forces with the mysterious contact. Together, you begin exposing corporate corruption. But the deeper you dig, the more dangerous it becomes...",
            vec![
                Choice::gated("Continue the investigation", "vigilante_deep", illegal_missions(3)),
                Choice::open("This is too dangerous, back out", "redemption_path"),
            ],
        ),
        StoryNode::chapter(
            "lawful_path",
            "White Hat Guardian",
            "You report the contact to the authorities and offer your skills to help them. They recruit you as a consultant to fight cybercrime.",
            vec![
                Choice::gated("Accept the position", "government_agent", heat(20)),
                Choice::open("Work independently", "freelancer_path"),
            ],
        ),
        StoryNode::chapter(
            "criminal_path",
            "Dark Web King",
            "You use the information to blackmail both sides. Money flows in, but so does the heat. Law enforcement is getting closer...",
            vec![
                Choice::gated("Go deeper into the criminal underworld", "crime_lord", money(2000)),
                Choice::open("Try to escape and disappear", "fugitive_path"),
            ],
        ),
        StoryNode::chapter(
            "freelancer_path",
            "Independent Consultant",
            "You build a reputation as a skilled, ethical hacker. Companies pay top dollar for your services, and you sleep well at night.",
            vec![
                Choice::gated("Start your own security firm", "business_owner", level(10)),
                Choice::open("Continue solo work", "master_freelancer"),
            ],
        ),
        StoryNode::chapter(
            "empire_path",
            "Building an Empire",
            "You start recruiting other hackers, building a network of skilled individuals. Your collective grows in power and influence.",
            vec![
                Choice::gated("Focus on legal services", "tech_company", money(3000)),
                Choice::gated("Control the dark web markets", "crime_syndicate", illegal_missions(10)),
            ],
        ),
        StoryNode::chapter(
            "vigilante_deep",
            "The Conspiracy Unfolds",
            "You discover the corporation is involved in illegal surveillance of millions. You have the evidence to bring them down, but they know you have it.",
            vec![
                Choice::open("Release everything to the public", "hero_ending"),
                Choice::open("Negotiate a deal", "compromise_ending"),
            ],
        ),
        StoryNode::chapter(
            "redemption_path",
            "Second Chances",
            "You step back from the dangerous work and focus on making amends. Some doors close, but others open.",
            vec![
                Choice::gated("Teach others ethical hacking", "mentor_ending", level(12)),
                Choice::open("Work with law enforcement", "reformed_ending"),
            ],
        ),
        StoryNode::chapter(
            "government_agent",
            "Federal Cyber Agent",
            "You work with government agencies to stop cybercriminals. The pay is steady, the work is meaningful, but bureaucracy is frustrating.",
            vec![
                Choice::gated("Rise through the ranks", "agency_director", level(15)),
                Choice::open("Return to private sector", "freelancer_path"),
            ],
        ),
        StoryNode::chapter(
            "crime_lord",
            "Criminal Mastermind",
            "You control a vast criminal network. Money pours in, but paranoia grows. Every shadow could be law enforcement.",
            vec![
                Choice::gated("Keep expanding your empire", "kingpin_ending", heat(70)),
                Choice::open("Try to leave this life behind", "escape_attempt"),
            ],
        ),
        StoryNode::chapter(
            "fugitive_path",
            "On the Run",
            "You try to disappear, changing identities and locations. Freedom comes at a price - constant vigilance and isolation.",
            vec![
                Choice::open("Hide forever", "hidden_ending"),
                Choice::open("Turn yourself in", "surrender_ending"),
            ],
        ),
        StoryNode::chapter(
            "business_owner",
            "Security Firm CEO",
            "Your company is thriving. You employ dozens of ethical hackers and protect major corporations from cyber threats.",
            vec![Choice::gated("Go public with your company", "tycoon_ending", money(5000))],
        ),
        StoryNode::chapter(
            "master_freelancer",
            "Legend of the Trade",
            "Your reputation precedes you. Companies worldwide seek your expertise. You work on your terms.",
            vec![Choice::gated("Retire at the top", "retirement_ending", level(15))],
        ),
        StoryNode::chapter(
            "tech_company",
            "Tech Startup Success",
            "Your collective evolves into a legitimate tech company. Investors are interested, and the future is bright.",
            vec![Choice::gated("Accept venture capital", "unicorn_ending", money(4000))],
        ),
        StoryNode::chapter(
            "crime_syndicate",
            "Dark Web Emperor",
            "Your syndicate controls major dark web operations. Power is absolute, but so are the risks.",
            vec![Choice::gated("Maintain your empire", "emperor_ending", heat(80))],
        ),
    ]
}

fn endings() -> Vec<StoryNode> {
    vec![
        StoryNode::ending(
            "hero_ending",
            "THE HERO",
            "You release all evidence to the media. The corporation falls, its executives face justice. You become a symbol of digital resistance. Some call you a hero, others a vigilante. But you know you did the right thing.",
            Good,
        ),
        StoryNode::ending(
            "compromise_ending",
            "THE NEGOTIATOR",
            "You negotiate a deal: the corporation reforms its practices, compensates victims, and you walk away with enough money to live comfortably. Not perfect, but pragmatic.",
            Neutral,
        ),
        StoryNode::ending(
            "mentor_ending",
            "THE MENTOR",
            "You establish an academy teaching ethical hacking. Your students go on to protect systems worldwide. Your legacy is education and positive change.",
            Good,
        ),
        StoryNode::ending(
            "reformed_ending",
            "THE REFORMED",
            "Working with law enforcement, you help catch cybercriminals. Your past gives you unique insight. Redemption is found in service.",
            Good,
        ),
        StoryNode::ending(
            "agency_director",
            "THE DIRECTOR",
            "You rise to lead a federal cyber agency. From this position, you shape national cybersecurity policy and protect millions.",
            Good,
        ),
        StoryNode::ending(
            "kingpin_ending",
            "THE KINGPIN",
            "You rule the digital underworld, but at what cost? Wealth beyond measure, but constant paranoia. You won, but did you really?",
            Bad,
        ),
        StoryNode::ending(
            "escape_attempt",
            "THE ESCAPEE",
            "You try to leave, but your past catches up. Federal agents raid your location. The empire falls, and you face decades in prison.",
            Bad,
        ),
        StoryNode::ending(
            "hidden_ending",
            "THE GHOST",
            "You successfully disappear. Years pass in various countries under different names. Free, but forever alone. Was it worth it?",
            Neutral,
        ),
        StoryNode::ending(
            "surrender_ending",
            "THE PENITENT",
            "You turn yourself in. After serving your time, you emerge changed. A second chance at life, this time doing things right.",
            Neutral,
        ),
        StoryNode::ending(
            "tycoon_ending",
            "THE TYCOON",
            "Your security company goes public. You become a billionaire. From underground hacker to respected CEO - the ultimate success story.",
            Good,
        ),
        StoryNode::ending(
            "retirement_ending",
            "THE LEGEND",
            "You retire at the peak of your career. Your name is whispered with respect in hacker circles. A life well-lived on your own terms.",
            Good,
        ),
        StoryNode::ending(
            "unicorn_ending",
            "THE ENTREPRENEUR",
            "Your startup becomes a unicorn valued at over $1 billion. From hacker to tech entrepreneur - you changed the world legitimately.",
            Good,
        ),
        StoryNode::ending(
            "emperor_ending",
            "THE EMPEROR",
            "You control the dark web. Unlimited power and wealth. But one day, everyone falls. The question is when, not if.",
            Bad,
        ),
    ]
}

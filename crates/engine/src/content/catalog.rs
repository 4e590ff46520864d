//! Characters, missions, shop items, achievements and random events.

use hacktycoon_domain::{
    Achievement, AchievementCondition, CharacterArchetype, CharacterId, EventEffect, ItemId,
    Mission, MissionId, MissionType, RandomEvent, ShopItem, Skill, SkillSet,
};

fn character(
    id: &str,
    name: &str,
    avatar: &str,
    backstory: &str,
    skills: SkillSet,
    starting_money: u64,
) -> CharacterArchetype {
    CharacterArchetype {
        id: CharacterId::new(id),
        name: name.to_string(),
        avatar: avatar.to_string(),
        backstory: backstory.to_string(),
        skills,
        starting_money,
    }
}

pub fn characters() -> Vec<CharacterArchetype> {
    vec![
        character(
            "ghost",
            "Ghost",
            "👻",
            "Once a cybersecurity expert for a major corporation, you witnessed corruption at the highest levels. Now you use your skills to expose the truth and fight for justice in the digital underground.",
            SkillSet::new(8, 9, 5, 7),
            500,
        ),
        character(
            "phoenix",
            "Phoenix",
            "🔥",
            "A reformed black hat hacker who got caught and served time. You emerged with a new purpose: to use your notorious skills for good while staying one step ahead of your past.",
            SkillSet::new(9, 6, 7, 8),
            300,
        ),
        character(
            "cipher",
            "Cipher",
            "🎭",
            "A cryptography genius and social engineer. You can crack any code and manipulate anyone. Your mysterious past is encrypted even from yourself.",
            SkillSet::new(7, 7, 9, 6),
            400,
        ),
        character(
            "nexus",
            "Nexus",
            "⚡",
            "Born into the digital age, you learned to code before you could write. A prodigy hacker with bleeding-edge tech knowledge and unlimited potential.",
            SkillSet::new(6, 5, 6, 10),
            600,
        ),
    ]
}

fn mission(
    id: u32,
    name: &str,
    mission_type: MissionType,
    difficulty: u32,
    (xp, money, energy, heat): (u32, u64, u32, u32),
    story: &str,
) -> Mission {
    Mission {
        id: MissionId::new(id),
        name: name.to_string(),
        mission_type,
        difficulty,
        xp,
        money,
        energy,
        heat,
        story: story.to_string(),
    }
}

pub fn missions() -> Vec<Mission> {
    use MissionType::{Illegal, Legal};

    vec![
        mission(
            1,
            "Scan Network",
            Legal,
            1,
            (20, 50, 10, 0),
            "A local business needs a security audit.",
        ),
        mission(
            2,
            "Debug Code",
            Legal,
            1,
            (15, 40, 8, 0),
            "Help a startup fix their website bugs.",
        ),
        mission(
            3,
            "Steal Data",
            Illegal,
            2,
            (40, 150, 20, 15),
            "A rival wants competitor secrets.",
        ),
        mission(
            4,
            "Plant Backdoor",
            Illegal,
            3,
            (60, 300, 30, 25),
            "Install persistent access to a corporate server.",
        ),
        mission(
            5,
            "Teach Workshop",
            Legal,
            2,
            (30, 100, 15, 0),
            "Share your knowledge with aspiring hackers.",
        ),
        mission(
            6,
            "DDoS Attack",
            Illegal,
            4,
            (80, 500, 40, 35),
            "Take down a website for an anonymous client.",
        ),
        mission(
            7,
            "Ransomware Deploy",
            Illegal,
            5,
            (100, 800, 50, 45),
            "Deploy ransomware to a corporate target.",
        ),
        mission(
            8,
            "Security Consulting",
            Legal,
            3,
            (50, 200, 25, 0),
            "Advise a company on their security posture.",
        ),
        mission(
            9,
            "Phishing Campaign",
            Illegal,
            3,
            (55, 250, 28, 20),
            "Launch a targeted phishing attack.",
        ),
        mission(
            10,
            "White Hat Pentest",
            Legal,
            4,
            (70, 350, 35, 0),
            "Perform authorized penetration testing.",
        ),
    ]
}

fn item(id: &str, name: &str, cost: u64, effect: Skill, value: u32, desc: &str) -> ShopItem {
    ShopItem {
        id: ItemId::new(id),
        name: name.to_string(),
        cost,
        effect,
        value,
        desc: desc.to_string(),
    }
}

pub fn shop_items() -> Vec<ShopItem> {
    vec![
        item("vpn", "Premium VPN", 200, Skill::Stealth, 2, "Reduces heat generation by 20%"),
        item(
            "toolkit",
            "Advanced Toolkit",
            300,
            Skill::Hacking,
            2,
            "Improves hacking success rate",
        ),
        item("ai", "AI Assistant", 500, Skill::Tech, 3, "Boosts all skills slightly"),
        item("social", "Deep Fake Kit", 250, Skill::Social, 2, "Better social engineering"),
        item("proxy", "Proxy Network", 400, Skill::Stealth, 3, "Advanced anonymity tools"),
        item("exploit", "Zero-Day Exploit", 1000, Skill::Hacking, 4, "Powerful hacking tool"),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    use AchievementCondition::*;

    vec![
        Achievement::new(
            "first",
            "First Steps",
            "Complete your first mission",
            MissionsCompleted(1),
        ),
        Achievement::new("cash", "Money Maker", "Earn $5000", MinMoney(5000)),
        Achievement::new("pro", "Professional", "Reach level 10", MinLevel(10)),
        Achievement::new("master", "Master Hacker", "Reach level 15", MinLevel(15)),
        Achievement::new("legal", "White Hat", "Complete 10 legal missions", LegalMissions(10)),
        Achievement::new(
            "illegal",
            "Black Hat",
            "Complete 10 illegal missions",
            IllegalMissions(10),
        ),
        Achievement::new("legendary", "Legendary", "Complete 20 missions", MissionsCompleted(20)),
        Achievement::new(
            "unstoppable",
            "Unstoppable",
            "Succeed at 10 missions in a row",
            MissionStreak(10),
        ),
        Achievement::new("shopaholic", "Shopaholic", "Own every piece of equipment", ItemsOwned(6)),
        Achievement::new("specialist", "Specialist", "Train any skill to 12", SkillLevel(12)),
    ]
}

fn event(name: &str, message: &str, effect: EventEffect) -> RandomEvent {
    RandomEvent {
        name: name.to_string(),
        message: message.to_string(),
        effect,
    }
}

pub fn random_events() -> Vec<RandomEvent> {
    vec![
        event("Laptop Crashed!", "💻 Laptop crashed! -$50", EventEffect::Money(-50)),
        event(
            "Found Vulnerability",
            "🎯 Vulnerability! Next rewards x2!",
            EventEffect::DoubleRewardNext,
        ),
        event("Police Raid Warning", "🚨 Police nearby! Heat +20", EventEffect::Heat(20)),
        event("Hacker Gift", "🎁 Anonymous gift: +$200!", EventEffect::Money(200)),
        event("Equipment Upgrade", "⚡ Equipment upgrade! +50 XP", EventEffect::BonusXp(50)),
        event("Informant Tip", "🕵️ Informant helped! Heat -15", EventEffect::Heat(-15)),
        event("Hardware Failure", "⚠️ Hardware failure! -$100", EventEffect::Money(-100)),
        event(
            "Energy Drink Stash",
            "🥤 Found a stash of energy drinks! Energy +20",
            EventEffect::Energy(20),
        ),
        event("Security Breach", "🔔 Detected! Heat +15", EventEffect::Heat(15)),
        event("Crypto Windfall", "💰 Bitcoin windfall! +$500", EventEffect::Money(500)),
        event("VPN Compromised", "🔓 VPN compromised! Heat +25", EventEffect::Heat(25)),
    ]
}

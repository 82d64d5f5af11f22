pub struct QuestionSeed {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
    pub hint: &'static str,
}

pub struct PeerSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub xp: u32,
}

pub const QUESTION_DATA: &[QuestionSeed] = &[
    QuestionSeed {
        id: 1,
        prompt: "What does 'FPS' stand for in gaming?",
        options: ["First Person Shooter", "Frames Per Second", "Fast Paced Strategy", "Final Player Score"],
        correct_index: 1,
        explanation: "FPS stands for Frames Per Second, which measures how many individual frames are displayed per second in a video game, affecting the smoothness of gameplay.",
        hint: "It's about how smooth the picture looks.",
    },
    QuestionSeed {
        id: 2,
        prompt: "Which programming language is most commonly used for web development?",
        options: ["Python", "Java", "JavaScript", "C++"],
        correct_index: 2,
        explanation: "JavaScript is the most commonly used programming language for web development, as it runs in all web browsers and enables interactive web pages.",
        hint: "It runs inside every web browser.",
    },
    QuestionSeed {
        id: 3,
        prompt: "What is the largest planet in our solar system?",
        options: ["Saturn", "Neptune", "Jupiter", "Earth"],
        correct_index: 2,
        explanation: "Jupiter is the largest planet in our solar system, with a mass greater than all other planets combined and a diameter of about 88,695 miles.",
        hint: "It's a gas giant named after the king of the Roman gods.",
    },
    QuestionSeed {
        id: 4,
        prompt: "In gaming, what does 'RPG' stand for?",
        options: ["Rapid Pulse Gaming", "Role Playing Game", "Real Player Graphics", "Random Point Generator"],
        correct_index: 1,
        explanation: "RPG stands for Role Playing Game, a genre where players assume the roles of characters and make decisions that affect the story and character development.",
        hint: "Players take on the role of a character.",
    },
    QuestionSeed {
        id: 5,
        prompt: "What is the speed of light in a vacuum?",
        options: [
            "299,792,458 meters per second",
            "150,000,000 meters per second",
            "300,000,000 meters per second",
            "186,000 miles per hour",
        ],
        correct_index: 0,
        explanation: "The speed of light in a vacuum is exactly 299,792,458 meters per second, which is a fundamental constant of nature used in physics.",
        hint: "It's just under 300 million meters per second.",
    },
    QuestionSeed {
        id: 6,
        prompt: "Which company developed the game 'Minecraft'?",
        options: ["Electronic Arts", "Mojang Studios", "Blizzard Entertainment", "Valve Corporation"],
        correct_index: 1,
        explanation: "Minecraft was developed by Mojang Studios (originally Mojang AB), founded by Markus Persson. Microsoft later acquired Mojang in 2014.",
        hint: "A Swedish studio founded by Markus Persson.",
    },
    QuestionSeed {
        id: 7,
        prompt: "What is the binary representation of the decimal number 8?",
        options: ["1010", "1000", "1100", "0111"],
        correct_index: 1,
        explanation: "The decimal number 8 in binary is 1000. Binary uses only 0s and 1s, and 1000 represents 1×8 + 0×4 + 0×2 + 0×1 = 8.",
        hint: "Eight is two to the third power.",
    },
    QuestionSeed {
        id: 8,
        prompt: "Which element has the chemical symbol 'Au'?",
        options: ["Silver", "Aluminum", "Gold", "Argon"],
        correct_index: 2,
        explanation: "Gold has the chemical symbol 'Au', which comes from the Latin word 'aurum' meaning gold. It's element number 79 on the periodic table.",
        hint: "The symbol comes from the Latin word 'aurum'.",
    },
    QuestionSeed {
        id: 9,
        prompt: "What does 'CPU' stand for in computer hardware?",
        options: ["Computer Processing Unit", "Central Processing Unit", "Core Performance Unit", "Central Program Unit"],
        correct_index: 1,
        explanation: "CPU stands for Central Processing Unit, which is the main component of a computer that performs most processing tasks and executes instructions.",
        hint: "It's the central part of the computer that processes instructions.",
    },
    QuestionSeed {
        id: 10,
        prompt: "Which gaming platform was first to introduce achievements/trophies?",
        options: ["PlayStation Network", "Steam", "Xbox Live", "Nintendo Network"],
        correct_index: 2,
        explanation: "Xbox Live was the first major gaming platform to introduce achievements in 2005, which became a popular feature later adopted by other platforms.",
        hint: "Microsoft's online service, launched achievements in 2005.",
    },
];

pub const REPLY_DATA: &[&str] = &[
    "That's a great question about environmental science! Climate change is indeed one of the most pressing issues of our time...",
    "Renewable energy sources like solar, wind, and hydroelectric power are becoming increasingly important for sustainable development...",
    "Biodiversity is crucial for ecosystem health. When we lose species, we lose the natural balance that keeps our environment stable...",
    "Sustainable living practices can make a real difference! Even small changes in our daily habits add up to significant environmental impact...",
    "The circular economy is a fascinating concept that aims to eliminate waste by reusing and recycling materials continuously...",
    "Ocean conservation is critical - our oceans absorb about 30% of carbon dioxide and produce over 50% of our oxygen...",
    "Deforestation affects not just wildlife but also global weather patterns and carbon storage...",
    "Green technology innovations are helping us find solutions to environmental challenges while creating economic opportunities...",
];

pub const TIP_DATA: &[&str] = &[
    "💡 Eco Tip: Replace plastic water bottles with a reusable one to save money and reduce waste!",
    "🌱 Eco Tip: Unplug electronics when not in use - they consume energy even when turned off!",
    "♻️ Eco Tip: Start composting food scraps to reduce waste and create nutrient-rich soil!",
    "🚲 Eco Tip: Try walking, biking, or using public transport instead of driving when possible!",
    "💧 Eco Tip: Take shorter showers to conserve water - even 2 minutes less makes a difference!",
    "🌿 Eco Tip: Choose products with minimal packaging to reduce waste!",
    "⚡ Eco Tip: Switch to LED light bulbs - they use 75% less energy than traditional bulbs!",
    "🌍 Eco Tip: Buy local and seasonal produce to reduce your carbon footprint!",
];

pub const GREETING: &str = "Hello! I'm your gaming and learning assistant! Ask me anything about games, education strategies, achievements, or any topic you want to explore!";

pub const PEER_DATA: &[PeerSeed] = &[
    PeerSeed { id: "2", name: "Emma Johnson", xp: 450 },
    PeerSeed { id: "3", name: "Marcus Rodriguez", xp: 380 },
    PeerSeed { id: "1", name: "Alex Chen", xp: 285 },
    PeerSeed { id: "4", name: "Sophie Kim", xp: 220 },
    PeerSeed { id: "5", name: "David Park", xp: 180 },
    PeerSeed { id: "6", name: "Lisa Wang", xp: 165 },
    PeerSeed { id: "7", name: "Ryan O'Connor", xp: 140 },
];

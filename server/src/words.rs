//! Built-in candidate word pool for board generation.

/// Static list of board words. Boards draw 25 words at a time, so the list
/// supports several consecutive games before the remainder pool wraps.
pub const WORDS: &[&str] = &[
    "africa", "agent", "air", "alien", "alps", "amazon", "ambulance", "america",
    "angel", "antarctica", "apple", "arm", "atlantis", "australia", "aztec", "ball",
    "band", "bank", "bar", "bark", "bat", "battery", "beach", "bear",
    "beat", "bed", "beijing", "bell", "belt", "berlin", "bermuda", "berry",
    "bill", "block", "board", "bolt", "bomb", "bond", "boom", "boot",
    "bottle", "bow", "box", "bridge", "brush", "buck", "buffalo", "bug",
    "bugle", "button", "calf", "canada", "cap", "capital", "car", "card",
    "carrot", "casino", "cast", "cat", "cell", "centaur", "center", "chair",
    "change", "charge", "check", "chest", "chick", "china", "chocolate", "church",
    "circle", "cliff", "cloak", "club", "code", "cold", "comic", "compound",
    "concert", "conductor", "contract", "cook", "copper", "cotton", "court", "cover",
    "crane", "crash", "cricket", "cross", "crown", "cycle", "dance", "date",
    "day", "death", "deck", "degree", "diamond", "dice", "dinosaur", "disease",
    "doctor", "dog", "draft", "dragon", "dress", "drill", "drop", "duck",
    "dwarf", "eagle", "egypt", "embassy", "engine", "england", "europe", "eye",
    "face", "fair", "fall", "fan", "fence", "field", "fighter", "figure",
    "file", "film", "fire", "fish", "flute", "fly", "foot", "force",
    "forest", "fork", "france", "game", "gas", "genius", "germany", "ghost",
    "giant", "glass", "glove", "gold", "grace", "grass", "greece", "green",
    "ground", "ham", "hand", "hawk", "head", "heart", "helicopter", "hole",
    "hollywood", "honey", "hood", "hook", "horn", "horse", "horseshoe", "hospital",
    "hotel", "ice", "india", "iron", "ivory", "jack", "jam", "jet",
    "jupiter", "kangaroo", "ketchup", "key", "kid", "king", "kiwi", "knife",
    "knight", "lab", "lap", "laser", "lawyer", "lead", "lemon", "life",
    "light", "limousine", "line", "link", "lion", "litter", "loch", "log",
];

/// The candidate word list loaded at startup.
pub fn word_pool() -> Vec<String> {
    WORDS.iter().map(|word| word.to_string()).collect()
}

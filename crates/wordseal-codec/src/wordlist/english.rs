//! The built-in 1024-word English list.
//!
//! Entries are sorted, unique, 3 to 8 lowercase ASCII letters long, and no
//! two entries share their first four letters. An entry's position is its digit
//! value; reordering or replacing entries changes every mnemonic.

/// Number of entries in a word list.
pub const WORDLIST_SIZE: usize = 1024;

/// English word list, indexed by digit value.
pub static WORDS: [&str; WORDLIST_SIZE] = [
    "able", "above", "absorb", "absurd", "access", "account", "achieve", "acoustic",
    "across", "action", "actress", "adapt", "addict", "adjust", "adult", "advice",
    "affair", "again", "age", "ahead", "aim", "airport", "alarm", "alcohol",
    "alien", "alley", "alone", "alpha", "also", "always", "amazing", "amount",
    "analyst", "ancient", "angle", "animal", "announce", "another", "antenna", "anxiety",
    "apart", "appear", "approve", "arch", "area", "argue", "armed", "around",
    "arrange", "arrive", "art", "artist", "ask", "assault", "assist", "asthma",
    "atom", "attend", "attract", "audit", "aunt", "auto", "average", "awake",
    "away", "awesome", "awkward", "baby", "bacon", "bag", "balcony", "bamboo",
    "banner", "barely", "barrel", "basic", "battle", "bean", "because", "beef",
    "begin", "behind", "below", "bench", "best", "better", "beyond", "bid",
    "bind", "bird", "bitter", "blade", "blanket", "bleak", "blind", "blossom",
    "blue", "blush", "boat", "boil", "bone", "book", "border", "borrow",
    "bottom", "box", "bracket", "brand", "brave", "breeze", "bridge", "bright",
    "brisk", "broken", "broom", "brown", "bubble", "budget", "build", "bulk",
    "bundle", "burden", "burst", "business", "butter", "buzz", "cabin", "cactus",
    "cake", "calm", "camp", "canal", "candy", "canoe", "canyon", "capital",
    "car", "card", "carpet", "cart", "cash", "castle", "cat", "catch",
    "cattle", "cause", "cave", "celery", "center", "cereal", "chair", "champion",
    "chaos", "charge", "chat", "check", "chef", "chest", "chief", "chimney",
    "choose", "chuckle", "churn", "cinnamon", "citizen", "civil", "clap", "claw",
    "clean", "clever", "client", "climb", "clip", "clog", "cloth", "clown",
    "clump", "clutch", "coast", "code", "coil", "color", "column", "come",
    "comic", "company", "conduct", "congress", "consider", "convince", "cool", "copy",
    "core", "correct", "cotton", "country", "course", "cover", "crack", "craft",
    "crane", "crater", "crazy", "credit", "crew", "crime", "critic", "cross",
    "crowd", "cruel", "crumble", "crush", "crystal", "culture", "cupboard", "current",
    "curve", "custom", "cycle", "damage", "dance", "daring", "daughter", "day",
    "debate", "decade", "decide", "decorate", "deer", "define", "degree", "deliver",
    "demise", "dentist", "depart", "deposit", "deputy", "describe", "design", "despair",
    "detail", "develop", "devote", "dial", "diary", "diesel", "differ", "dignity",
    "dinner", "direct", "disagree", "disease", "dismiss", "display", "divert", "divorce",
    "doctor", "dog", "dolphin", "donate", "donor", "dose", "dove", "dragon",
    "drastic", "dream", "drift", "drink", "drive", "drum", "duck", "dune",
    "dust", "duty", "dynamic", "eagle", "earn", "easily", "easy", "ecology",
    "edge", "educate", "egg", "either", "elder", "elegant", "elephant", "elite",
    "embark", "embrace", "emotion", "empower", "enable", "end", "endorse", "energy",
    "engage", "enhance", "enlist", "enrich", "ensure", "entire", "envelope", "equal",
    "era", "erode", "error", "escape", "essence", "eternal", "evidence", "evoke",
    "exact", "excess", "excite", "excuse", "exercise", "exhibit", "exist", "exotic",
    "expect", "explain", "express", "extra", "eyebrow", "face", "fade", "faith",
    "false", "family", "fan", "fantasy", "fashion", "fatal", "fatigue", "favorite",
    "february", "fee", "feel", "fence", "fetch", "few", "fiction", "figure",
    "film", "final", "fine", "finish", "firm", "fiscal", "fit", "fix",
    "flame", "flat", "flee", "flip", "flock", "flower", "flush", "foam",
    "fog", "fold", "food", "force", "forget", "fortune", "forward", "foster",
    "fox", "frame", "fresh", "fringe", "front", "frown", "fruit", "fun",
    "furnace", "future", "gain", "gallery", "gap", "garbage", "garlic", "gas",
    "gate", "gauge", "general", "genre", "genuine", "ghost", "gift", "ginger",
    "girl", "glad", "glare", "glide", "globe", "glory", "glow", "goat",
    "gold", "goose", "gospel", "govern", "grab", "grain", "grape", "gray",
    "great", "grid", "grit", "group", "grunt", "guess", "guilt", "gun",
    "habit", "half", "hamster", "happy", "hard", "harvest", "have", "hazard",
    "health", "heavy", "hello", "helmet", "hen", "hidden", "hill", "hip",
    "history", "hockey", "hole", "hollow", "honey", "hope", "horror", "hospital",
    "hotel", "hover", "huge", "humble", "hundred", "hunt", "hurry", "husband",
    "ice", "idea", "idle", "ill", "illness", "imitate", "immune", "impose",
    "impulse", "include", "increase", "indicate", "industry", "inflict", "inhale", "initial",
    "injury", "inner", "input", "insane", "inside", "install", "interest", "invest",
    "involve", "island", "issue", "ivory", "jaguar", "jazz", "jeans", "jewel",
    "join", "journey", "judge", "jump", "junior", "just", "keen", "ketchup",
    "kick", "kidney", "kingdom", "kit", "kite", "kiwi", "knife", "know",
    "label", "ladder", "lake", "language", "large", "latin", "laundry", "law",
    "lawsuit", "lazy", "leaf", "leave", "left", "legal", "leisure", "lend",
    "lens", "lesson", "level", "liberty", "license", "lift", "like", "limit",
    "lion", "list", "live", "load", "lobster", "lock", "lonely", "loop",
    "loud", "love", "lucky", "lumber", "lunch", "lyrics", "mad", "magnet",
    "mail", "major", "mammal", "manage", "mango", "manual", "marble", "margin",
    "market", "mask", "master", "material", "matrix", "maximum", "meadow", "measure",
    "mechanic", "media", "melt", "memory", "menu", "merge", "merry", "message",
    "meter", "middle", "milk", "mimic", "minimum", "minute", "mirror", "miss",
    "mix", "mixture", "model", "mom", "monitor", "monster", "moon", "more",
    "mosquito", "motion", "mountain", "move", "much", "mule", "muscle", "mushroom",
    "must", "myself", "myth", "name", "narrow", "nation", "near", "need",
    "neglect", "nephew", "nest", "network", "never", "next", "night", "noise",
    "noodle", "north", "notable", "nothing", "novel", "nuclear", "nurse", "oak",
    "object", "obscure", "obtain", "occur", "october", "off", "office", "oil",
    "old", "olympic", "once", "onion", "only", "opera", "oppose", "orange",
    "orchard", "ordinary", "orient", "orphan", "other", "outer", "outside", "oven",
    "own", "oxygen", "ozone", "paddle", "pair", "palm", "panel", "panther",
    "parade", "park", "party", "patch", "patient", "pattern", "pave", "peace",
    "pear", "pelican", "penalty", "people", "perfect", "person", "phone", "phrase",
    "piano", "picture", "pig", "pill", "pink", "pipe", "pitch", "place",
    "plastic", "play", "pledge", "plug", "poem", "point", "pole", "pond",
    "pool", "portion", "possible", "potato", "poverty", "power", "praise", "prefer",
    "present", "prevent", "pride", "print", "prison", "prize", "process", "profit",
    "project", "proof", "prosper", "proud", "public", "pull", "pulse", "punch",
    "puppy", "purity", "purse", "put", "pyramid", "quantum", "question", "quit",
    "quote", "raccoon", "rack", "radio", "rain", "rally", "ranch", "range",
    "rare", "rather", "raw", "ready", "reason", "rebuild", "receive", "record",
    "reduce", "reform", "region", "regular", "relax", "relief", "remain", "remind",
    "render", "rent", "repair", "replace", "require", "resemble", "resource", "result",
    "retreat", "reunion", "review", "rhythm", "ribbon", "rich", "ridge", "right",
    "ring", "ripple", "ritual", "river", "roast", "robust", "romance", "rookie",
    "rose", "rough", "route", "rubber", "rug", "run", "rural", "saddle",
    "safe", "salad", "salon", "salute", "sample", "satisfy", "sauce", "save",
    "scale", "scare", "scene", "school", "scissors", "scout", "screen", "scrub",
    "search", "seat", "secret", "security", "seek", "select", "seminar", "sense",
    "series", "session", "setup", "shadow", "shallow", "shed", "sheriff", "shift",
    "ship", "shock", "shoot", "short", "shove", "shrug", "shy", "sick",
    "siege", "sign", "silk", "silver", "simple", "sing", "sister", "six",
    "skate", "ski", "skin", "skull", "slam", "slender", "slide", "slim",
    "slot", "slush", "smart", "smoke", "snack", "snap", "snow", "soccer",
    "sock", "soft", "soldier", "solution", "someone", "soon", "sort", "sound",
    "source", "space", "spatial", "speak", "speed", "spend", "spice", "spike",
    "spirit", "spoil", "spoon", "spot", "spread", "spy", "squeeze", "stable",
    "staff", "stairs", "stand", "state", "steak", "stem", "stereo", "still",
    "stock", "stone", "story", "strategy", "strike", "struggle", "stuff", "style",
    "submit", "success", "sudden", "sugar", "suit", "sun", "sunset", "supply",
    "sure", "surge", "surround", "suspect", "swallow", "swap", "swear", "swift",
    "swing", "sword", "symptom", "system", "tackle", "tail", "talk", "tape",
    "task", "tattoo", "teach", "tell", "tenant", "tent", "test", "thank",
    "theme", "theory", "they", "this", "three", "throw", "thunder", "tide",
    "tilt", "time", "tip", "tissue", "toast", "today", "toe", "toilet",
    "tomato", "tone", "tonight", "tooth", "topic", "torch", "tortoise", "total",
    "toward", "town", "track", "traffic", "train", "trap", "travel", "treat",
    "trend", "tribe", "trigger", "trip", "trouble", "true", "trumpet", "truth",
    "tube", "tumble", "tunnel", "turn", "twelve", "twice", "twist", "type",
    "ugly", "unable", "uncle", "under", "unfair", "unhappy", "unique", "universe",
    "unlock", "unusual", "update", "uphold", "upper", "urban", "usage", "used",
    "useless", "utility", "vacuum", "valid", "valve", "vanish", "various", "vault",
    "velvet", "venture", "verb", "version", "vessel", "viable", "vicious", "video",
    "village", "violin", "virus", "visit", "vital", "vocal", "void", "volume",
    "voyage", "wagon", "walk", "walnut", "warfare", "warrior", "wasp", "water",
    "way", "weapon", "weasel", "web", "weekend", "welcome", "wet", "what",
    "wheel", "where", "whisper", "width", "wild", "win", "wine", "wink",
    "winter", "wisdom", "wish", "wolf", "wonder", "wool", "world", "worry",
    "wrap", "wrestle", "write", "yard", "yellow", "young", "zebra", "zone",
];

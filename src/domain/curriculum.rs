//! Static lesson catalog: tiers, lesson cards, piece notes, check and
//! checkmate studies and the topic pages with their study positions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::chess::PieceKind;

/// Topic pages reached from the intermediate and advanced tiers
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    TacticalPatterns,
    PositionalPlay,
    EndgameBasics,
    Planning,
    OpeningPrinciples,
}

/// Every screen the app can show
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    Learn,
    Pieces,
    BasicRules,
    CheckCheckmate,
    SpecialMoves,
    BasicTactics,
    Topic(TopicId),
    Play,
    Contact,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Learn => "Learn Chess",
            Page::Pieces => "Learning Chess Pieces",
            Page::BasicRules => "Basic Chess Rules",
            Page::CheckCheckmate => "Check & Checkmate",
            Page::SpecialMoves => "Special Moves",
            Page::BasicTactics => "Basic Tactics",
            Page::Topic(id) => topic(id).title,
            Page::Play => "Play Chess",
            Page::Contact => "Contact Us",
        }
    }

    /// Pages that show a "Back to Lessons" link
    pub fn is_lesson(self) -> bool {
        !matches!(self, Page::Landing | Page::Learn | Page::Play | Page::Contact)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tier {
    #[default]
    Basics,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basics, Tier::Intermediate, Tier::Advanced];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Basics => "Basics",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }

    pub fn cards(self) -> &'static [LessonCard] {
        match self {
            Tier::Basics => &BASICS,
            Tier::Intermediate => &INTERMEDIATE,
            Tier::Advanced => &ADVANCED,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LessonCard {
    pub title: &'static str,
    pub description: &'static str,
    /// `None` renders as "coming soon"
    pub page: Option<Page>,
}

const fn card(title: &'static str, description: &'static str, page: Option<Page>) -> LessonCard {
    LessonCard {
        title,
        description,
        page,
    }
}

const BASICS: [LessonCard; 6] = [
    card("Chess Pieces", "Learn how each piece moves on the board", Some(Page::Pieces)),
    card("Basic Rules", "Understanding the fundamental rules of chess", Some(Page::BasicRules)),
    card(
        "Check & Checkmate",
        "How to attack the king and win the game",
        Some(Page::CheckCheckmate),
    ),
    card("Special Moves", "Castling, en passant, and pawn promotion", Some(Page::SpecialMoves)),
    card("Board Setup", "How to correctly set up the chess board", Some(Page::BasicRules)),
    card("Basic Tactics", "Simple tactical patterns for beginners", Some(Page::BasicTactics)),
];

const INTERMEDIATE: [LessonCard; 6] = [
    card(
        "Opening Principles",
        "Key concepts for starting the game well",
        Some(Page::Topic(TopicId::OpeningPrinciples)),
    ),
    card(
        "Tactical Patterns",
        "Common tactical motifs and combinations",
        Some(Page::Topic(TopicId::TacticalPatterns)),
    ),
    card(
        "Positional Play",
        "Understanding pawn structure and piece placement",
        Some(Page::Topic(TopicId::PositionalPlay)),
    ),
    card(
        "Endgame Basics",
        "Essential endgame techniques and principles",
        Some(Page::Topic(TopicId::EndgameBasics)),
    ),
    card(
        "Planning",
        "How to create and execute plans in chess",
        Some(Page::Topic(TopicId::Planning)),
    ),
    card("Common Mistakes", "Avoiding typical intermediate-level errors", None),
];

const ADVANCED: [LessonCard; 6] = [
    card(
        "Advanced Tactics",
        "Complex tactical patterns and combinations",
        Some(Page::Topic(TopicId::TacticalPatterns)),
    ),
    card("Strategic Concepts", "Deep positional understanding and planning", None),
    card("Opening Theory", "Detailed analysis of opening variations", None),
    card("Complex Endgames", "Mastering difficult endgame positions", None),
    card("Calculation", "Improving your calculation abilities", None),
    card("Analysis Methods", "How to analyze your games effectively", None),
];

pub fn piece_description(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => {
            "The pawn moves forward one square, but captures diagonally. On its first move, it can move two squares forward. When a pawn reaches the opposite end of the board, it promotes to another piece."
        }
        PieceKind::Rook => {
            "The rook moves horizontally or vertically through any number of unoccupied squares. It's valued at about 5 pawns."
        }
        PieceKind::Knight => {
            "The knight moves in an L-shape: two squares horizontally or vertically and then one square at a right angle. It's the only piece that can jump over other pieces. Worth about 3 pawns."
        }
        PieceKind::Bishop => {
            "The bishop moves diagonally through any number of unoccupied squares. It stays on its original color square throughout the game. Valued at about 3 pawns."
        }
        PieceKind::Queen => {
            "The queen combines the power of the rook and bishop, moving horizontally, vertically, or diagonally through any number of unoccupied squares. It's the most powerful piece, worth about 9 pawns."
        }
        PieceKind::King => {
            "The king moves one square horizontally, vertically, or diagonally. It cannot move into check. Protecting the king is the ultimate goal of chess."
        }
    }
}

pub fn piece_tips(kind: PieceKind) -> [&'static str; 4] {
    match kind {
        PieceKind::Pawn => [
            "Control the center with your pawns in the opening",
            "Create pawn chains to protect each other",
            "Avoid creating isolated or doubled pawns when possible",
            "Push pawns to create passed pawns in the endgame",
        ],
        PieceKind::Knight => [
            "Knights are stronger in closed positions",
            "A knight on the rim is dim (knights work best centralized)",
            "Knights can jump over pieces, making them excellent in crowded positions",
            "Look for knight forks that attack multiple pieces simultaneously",
        ],
        PieceKind::Bishop => [
            "Bishops are stronger in open positions",
            "The bishop pair (having both bishops) is a significant advantage",
            "Avoid blocking your bishops with your own pawns",
            "Place bishops on long diagonals for maximum effectiveness",
        ],
        PieceKind::Rook => [
            "Rooks belong on open files (columns)",
            "Connect your rooks to double their power",
            "Place rooks on the 7th rank to attack enemy pawns",
            "Activate your rooks in the middlegame and endgame",
        ],
        PieceKind::Queen => [
            "Don't bring your queen out too early in the opening",
            "Avoid trading your queen for less valuable pieces",
            "Use your queen in coordination with other pieces",
            "Be careful of queen forks and pins",
        ],
        PieceKind::King => [
            "Castle early to protect your king",
            "Keep pawns in front of your castled king for protection",
            "In the endgame, activate your king as an attacking piece",
            "The king is a strong piece in the endgame - use it actively",
        ],
    }
}

/// A check or checkmate study with a hidden solution
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CheckPosition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fen: &'static str,
    pub solution: &'static str,
}

pub const CHECK_POSITIONS: [CheckPosition; 6] = [
    CheckPosition {
        id: "simple-check",
        title: "Simple Check",
        description: "White queen gives check to the black king",
        fen: "rnb1k1nr/pppp1ppp/8/4p3/1b1P4/2N1P3/PPP2PPP/R1BQKBNR w KQkq - 0 1",
        solution: "The black king must move, capture the queen, or block the check.",
    },
    CheckPosition {
        id: "double-check",
        title: "Double Check",
        description: "Both the bishop and knight are checking the king",
        fen: "rnbqkbnr/pppp1ppp/8/4p3/3P4/4P3/PPP2PPP/RNBQKBNR w KQkq - 0 1",
        solution: "In double check, the king must move as it's impossible to block or capture both attacking pieces at once.",
    },
    CheckPosition {
        id: "scholars-mate",
        title: "Scholar's Mate",
        description: "A common beginner's checkmate",
        fen: "rnb1kbnr/pppp1ppp/8/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
        solution: "This is checkmate. The queen attacks the king, and there's no way to escape, block, or capture.",
    },
    CheckPosition {
        id: "back-rank-mate",
        title: "Back Rank Mate",
        description: "Rook delivers checkmate on the back rank",
        fen: "6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1",
        solution: "This is checkmate. The black king is trapped by its own pawns, and the rook delivers check.",
    },
    CheckPosition {
        id: "smothered-mate",
        title: "Smothered Mate",
        description: "Knight delivers checkmate to a king surrounded by its own pieces",
        fen: "6rk/5Npp/8/8/8/8/8/7K w - - 0 1",
        solution: "This is checkmate. The black king is surrounded by its own pieces and can't escape the knight's check.",
    },
    CheckPosition {
        id: "arabian-mate",
        title: "Arabian Mate",
        description: "Rook and knight work together for checkmate",
        fen: "5rk1/5ppp/8/8/8/6N1/8/6RK w - - 0 1",
        solution: "This is checkmate. The knight controls the escape squares while the rook delivers check.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StudyPosition {
    pub fen: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Concept {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
    pub explanation: Option<&'static str>,
    pub positions: &'static [StudyPosition],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Topic {
    pub id: TopicId,
    pub title: &'static str,
    pub intro: &'static str,
    /// Heading above each concept's key points
    pub points_heading: &'static str,
    /// Heading above each concept's explanation
    pub explanation_heading: &'static str,
    pub concepts: &'static [Concept],
    /// Show a free, draggable practice board instead of study positions
    pub practice: bool,
}

impl Topic {
    pub fn concept(&self, index: usize) -> Option<&'static Concept> {
        self.concepts.get(index)
    }
}

const fn pos(fen: &'static str, title: &'static str, description: &'static str) -> StudyPosition {
    StudyPosition {
        fen,
        title,
        description,
    }
}

pub fn topic(id: TopicId) -> &'static Topic {
    match id {
        TopicId::TacticalPatterns => &TACTICAL_PATTERNS,
        TopicId::PositionalPlay => &POSITIONAL_PLAY,
        TopicId::EndgameBasics => &ENDGAME_BASICS,
        TopicId::Planning => &PLANNING,
        TopicId::OpeningPrinciples => &OPENING_PRINCIPLES,
    }
}

static TACTICAL_PATTERNS: Topic = Topic {
    id: TopicId::TacticalPatterns,
    practice: false,
    title: "Advanced Tactical Patterns",
    intro: "Building upon basic tactical motifs like pins and forks, these advanced tactical patterns involve deeper calculation and often combine multiple tactical themes in sequence.",
    points_heading: "Key Points",
    explanation_heading: "How It Works",
    concepts: &[
        Concept {
            id: "deflection",
            name: "Deflection",
            description: "A deflection tactic forces an enemy piece to abandon a defensive duty, creating tactical opportunities.",
            key_points: &[],
            explanation: Some(
                "Deflection is often combined with other tactics like pins or discovered attacks. By sacrificing material, you force a piece to move away from a crucial defensive position, opening the way for a stronger attack.",
            ),
            positions: &[
                pos(
                    "r1bqkb1r/ppp2ppp/2n2n2/3p4/3P4/2NQB3/PPP1PPPP/R3KBNR w KQkq - 0 6",
                    "Basic Deflection",
                    "White can play Qb5 to deflect Black's knight from defending the d5 pawn, winning material.",
                ),
                pos(
                    "r3k2r/pb1p1ppp/1pn1pn2/2p5/2PPQ3/P4NP1/1P2PPBP/R3K2R w KQkq - 0 11",
                    "Deflection from Defense",
                    "White can play Qxc6, deflecting the knight from defending the bishop on b7.",
                ),
            ],
        },
        Concept {
            id: "overloading",
            name: "Overloading",
            description: "Overloading occurs when a defensive piece has too many responsibilities and cannot handle all of them simultaneously.",
            key_points: &[],
            explanation: Some(
                "Unlike deflection which forces a piece to move, overloading exploits a piece that's already trying to defend multiple threats. Creating an additional threat forces the defender to abandon one of its defensive duties.",
            ),
            positions: &[
                pos(
                    "r1bqkb1r/ppp2ppp/5n2/3p4/3Pn3/3B4/PPP1NPPP/RNBQK2R w KQkq - 0 6",
                    "Overloaded Defender",
                    "The knight on e4 is overloaded - it defends both d6 and f6. Taking the knight exposes both vulnerabilities.",
                ),
                pos(
                    "r1b1k2r/1pp2ppp/p1p2n2/4p3/4P1q1/2N5/PPPQ1PPP/2KR1B1R w kq - 0 11",
                    "Complex Overloading",
                    "Black's queen is overloaded, defending both e5 and g7. White can exploit this with Nxe5.",
                ),
            ],
        },
        Concept {
            id: "interference",
            name: "Interference",
            description: "Interference involves blocking the line of operation between two enemy pieces, disrupting their coordination.",
            key_points: &[],
            explanation: Some(
                "By placing a piece in the path between two enemy pieces (often between a piece and the square it's defending), you can create tactical opportunities. This is frequently used to cut off defenders from the king to enable checkmate.",
            ),
            positions: &[
                pos(
                    "r1b1k2r/ppp2ppp/2n2n2/1B1pq3/3P4/2N5/PPP2PPP/R2QKB1R w KQkq - 2 8",
                    "Interfering with Defense",
                    "White can play Bxc6+, interfering with the connection between Black's queen and the d5 pawn.",
                ),
                pos(
                    "r2qkb1r/pp3ppp/2p1pn2/3p4/3P1B2/2PBP3/PP3PPP/RN1QK2R b KQkq - 0 8",
                    "Blocking Communication",
                    "Black can play Ne4, interfering with the white bishop's defense of the f2 pawn.",
                ),
            ],
        },
        Concept {
            id: "clearance",
            name: "Clearance Sacrifice",
            description: "A clearance sacrifice removes a piece (often your own) from a square to make way for another piece or tactic.",
            key_points: &[],
            explanation: Some(
                "Unlike most sacrifices that are made directly for material or positional gain, clearance sacrifices are made to vacate a square for another piece, often leading to a decisive advantage or checkmate pattern.",
            ),
            positions: &[
                pos(
                    "1rb1kb1r/p1qn1ppp/2p1p3/1p6/3P4/2N1PN2/PPP1BPPP/R2QK2R w KQk - 0 10",
                    "Clearing a Square",
                    "White can sacrifice the bishop with Bxb5, clearing the e2 square for the queen to deliver a check.",
                ),
                pos(
                    "r3kb1r/ppp2ppp/8/4P3/1n1P2q1/2N5/PPP2PPP/R1BQK2R w KQkq - 0 11",
                    "Removing a Defender",
                    "White can sacrifice the knight with Nxb4, clearing the c3 square for the queen to attack g7.",
                ),
            ],
        },
        Concept {
            id: "attraction",
            name: "Attraction",
            description: "Attraction forces an enemy piece (often the king) to move to an unfavorable square where it becomes vulnerable to further tactics.",
            key_points: &[],
            explanation: Some(
                "By offering a sacrifice, you can lure an opponent's piece to a square where it becomes vulnerable to a follow-up tactic. This is particularly powerful when combined with other tactical themes like discovered attacks.",
            ),
            positions: &[
                pos(
                    "r1bqkb1r/pppp1ppp/2n2n2/4p3/4P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 0 5",
                    "Queen Sacrifice",
                    "White can sacrifice the queen with Qh5+, forcing g6, then placing the queen on h4 for a discovered attack.",
                ),
                pos(
                    "r1bqk2r/ppp2ppp/2n2n2/2bpp3/2PP4/2N1PN2/PP3PPP/R1BQK2R w KQkq - 0 6",
                    "King Attraction",
                    "White can play Bxf7+, forcing the king to recapture and become vulnerable to a knight fork on e5.",
                ),
            ],
        },
        Concept {
            id: "demolition",
            name: "Defensive Demolition",
            description: "Demolition involves sacrificing material to destroy a defensive structure protecting the opponent's king.",
            key_points: &[],
            explanation: Some(
                "This advanced tactic often involves multiple sacrifices to break through a well-defended king position. After demolishing the defensive structure, a final combination can deliver checkmate or decisive material advantage.",
            ),
            positions: &[
                pos(
                    "r1bqkb1r/ppp3pp/2n2p2/3np3/2BP4/2N1PN2/PPP2PPP/R1BQK2R w KQkq - 0 7",
                    "Pawn Shield Destruction",
                    "White can sacrifice the bishop with Bxf7+, demolishing Black's king's pawn shield to start an attack.",
                ),
                pos(
                    "r1bqk2r/ppp1bppp/2n5/3p4/3Pn3/3B1N2/PPP1BPPP/RN1QK2R w KQkq - 4 7",
                    "Breaking Through",
                    "White can sacrifice the bishop with Bxe4, demolishing Black's defensive piece to expose the king.",
                ),
            ],
        },
    ],
};

static POSITIONAL_PLAY: Topic = Topic {
    id: TopicId::PositionalPlay,
    practice: false,
    title: "Positional Play",
    intro: "Positional play in chess focuses on long-term advantages rather than immediate tactical gains. It involves understanding pawn structures, piece placement, and strategic planning.",
    points_heading: "Key Points",
    explanation_heading: "",
    concepts: &[
        Concept {
            id: "pawn-structure",
            name: "Pawn Structure",
            description: "How your pawns are arranged significantly affects your position's strength and potential.",
            key_points: &[
                "Doubled pawns are generally weaker as they cannot defend each other",
                "Isolated pawns lack pawn support and can become targets",
                "Backward pawns cannot be advanced safely and are difficult to defend",
                "Pawn chains can provide strong defense but may limit piece mobility",
                "Passed pawns have no enemy pawns preventing them from promotion",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/8/3pP3/4P3/8/4K2k w - - 0 1",
                    "Doubled Pawns",
                    "White's doubled e-pawns are a structural weakness because they can't defend each other and control fewer squares.",
                ),
                pos(
                    "8/8/8/3p4/8/8/8/4K2k w - - 0 1",
                    "Isolated Pawn",
                    "This d-pawn is isolated with no friendly pawns on adjacent files, making it vulnerable to attack.",
                ),
                pos(
                    "8/8/8/2ppp3/3p4/4PP2/5P2/4K2k w - - 0 1",
                    "Pawn Chain",
                    "The pawns form a chain where each defends the one in front, creating a solid structure but limiting mobility.",
                ),
                pos(
                    "8/8/8/8/3P4/8/8/4K2k w - - 0 1",
                    "Passed Pawn",
                    "This pawn is 'passed' with no enemy pawns in front of it or on adjacent files to stop its advance to promotion.",
                ),
            ],
        },
        Concept {
            id: "piece-placement",
            name: "Piece Placement",
            description: "Where you place your pieces determines their effectiveness and influence on the board.",
            key_points: &[
                "Knights are strongest when centralized and weakest near the edges",
                "Bishops need open diagonals to be effective",
                "Rooks belong on open files or behind passed pawns",
                "Queens combine the power of rooks and bishops but are vulnerable to attacks",
                "Kings should be protected in the opening and middlegame but active in endgames",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/4N3/8/8/8/4K2k w - - 0 1",
                    "Centralized Knight",
                    "A knight in the center controls 8 squares - its maximum possible influence.",
                ),
                pos(
                    "8/8/8/8/8/8/8/4K2N b - - 0 1",
                    "Knight on the Edge",
                    "A knight on the edge controls only 2 squares - significantly reducing its power.",
                ),
                pos(
                    "8/8/8/8/3B4/8/8/4K2k w - - 0 1",
                    "Bishop on Open Diagonal",
                    "With open diagonals, a bishop can exert long-range influence across the board.",
                ),
                pos(
                    "8/3p1p2/4p3/8/3B4/8/8/4K2k w - - 0 1",
                    "Bad Bishop",
                    "A bishop restricted by its own pawns is considered 'bad' as its mobility is limited.",
                ),
            ],
        },
        Concept {
            id: "outposts",
            name: "Outposts",
            description: "An outpost is a square that cannot be attacked by enemy pawns and is ideally protected by your own pawns.",
            key_points: &[
                "Knights benefit most from outposts due to their limited range",
                "An ideal outpost is deep in enemy territory, often on rank 5 or 6",
                "Outposts near the center are particularly valuable",
                "Pieces on outposts exert pressure and restrict enemy movement",
                "Creating and using outposts is a key middlegame strategy",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/3Np3/8/8/8/4K2k w - - 0 1",
                    "Knight Outpost",
                    "White's knight is on a strong outpost on d5, protected by a pawn and can't be attacked by enemy pawns.",
                ),
                pos(
                    "8/p1p3p1/1p3p2/3N4/8/8/8/4K2k w - - 0 1",
                    "Strong Central Outpost",
                    "The knight on d5 can't be challenged by any pawn and dominates the position from its central outpost.",
                ),
                pos(
                    "8/8/8/3p4/2p1p3/8/PP3P2/4K2k w - - 0 1",
                    "Creating Outposts",
                    "White's pawn structure creates a potential knight outpost on d5, while Black has one on e4.",
                ),
            ],
        },
        Concept {
            id: "space-advantage",
            name: "Space Advantage",
            description: "Having more space means your pieces have more mobility while restricting your opponent's options.",
            key_points: &[
                "Advanced pawns claim territory and restrict enemy piece movement",
                "More space allows for easier piece coordination and tactical opportunities",
                "The side with less space must look for pawn breaks to release tension",
                "Space advantage is most valuable in the center and on the side where you're attacking",
                "Over-extension can create weaknesses that your opponent can exploit",
            ],
            explanation: None,
            positions: &[
                pos(
                    "4k3/pppppppp/8/8/PPPPPPPP/8/8/4K3 w - - 0 1",
                    "Space Advantage",
                    "White has advanced pawns controlling more territory, restricting Black's piece mobility.",
                ),
                pos(
                    "4k3/pp3ppp/2p5/2Pp4/3P1P2/8/PP4PP/4K3 w - - 0 1",
                    "Central Space Advantage",
                    "White's central pawns control more territory in the crucial central area of the board.",
                ),
                pos(
                    "4k3/pp3ppp/8/2ppp3/2PPP3/8/PP3PPP/4K3 w - - 0 1",
                    "Pawn Break Opportunity",
                    "Black can consider the c5-c4 pawn break to challenge White's space advantage.",
                ),
            ],
        },
        Concept {
            id: "weak-squares",
            name: "Weak Squares",
            description: "Squares that cannot be defended by pawns often become targets for piece occupation.",
            key_points: &[
                "A hole in the pawn structure creates potential weak squares",
                "Dark-squared bishops can't defend dark squares, making them potential weaknesses",
                "Knights are excellent at exploiting weak squares, especially if they can't be challenged",
                "Identifying and occupying weak squares in your opponent's camp is a key skill",
                "Preventing weak squares in your own position requires careful pawn movement",
            ],
            explanation: None,
            positions: &[
                pos(
                    "4k3/pp3ppp/8/2p1p3/4N3/8/PPP2PPP/4K3 w - - 0 1",
                    "Knight on Weak Square",
                    "White's knight occupies the d6 square that Black's pawns can't defend - a permanent weakness.",
                ),
                pos(
                    "4k3/pp1p1ppp/8/8/8/8/PPP1PPPP/4K3 w - - 0 1",
                    "Holes in Pawn Structure",
                    "The c6 and e6 squares are weak as they can't be defended by Black's pawns.",
                ),
                pos(
                    "4k3/pp1p1p1p/6p1/8/5N2/8/PPP1PPPP/4K3 w - - 0 1",
                    "Weak Dark Squares",
                    "Black's pawn structure has created weak dark squares that White's knight can exploit.",
                ),
            ],
        },
    ],
};

static ENDGAME_BASICS: Topic = Topic {
    id: TopicId::EndgameBasics,
    practice: false,
    title: "Endgame Basics",
    intro: "The endgame is the phase of the game when few pieces remain on the board. Mastering endgame principles is essential for converting advantages into wins and saving difficult positions.",
    points_heading: "Key Principles",
    explanation_heading: "",
    concepts: &[
        Concept {
            id: "king-pawn",
            name: "King and Pawn Endgames",
            description: "These are the most fundamental endgames. Understanding key concepts like opposition, the square rule, and king activity is essential.",
            key_points: &[
                "Opposition: Kings facing each other with one square between - the player not to move is at disadvantage",
                "Square rule: If the king can move within the square of an advancing pawn, it can catch it",
                "King activity: In endgames, the king becomes a strong piece and should be centralized",
                "Passed pawns: These are valuable assets that must be pushed or blockaded",
                "Creating passed pawns often decides the endgame",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/3k4/8/8/3P4/3K4 w - - 0 1",
                    "Opposition",
                    "White to move gains the opposition by playing Kd3, forcing Black's king to move away.",
                ),
                pos(
                    "8/8/8/8/8/8/3P4/K6k w - - 0 1",
                    "Square Rule",
                    "Black's king is outside the square of White's pawn, so cannot catch it before promotion.",
                ),
                pos(
                    "8/8/8/5k2/8/3K4/4P3/8 w - - 0 1",
                    "King Activity",
                    "White's centralized king supports the pawn's advance while restricting Black's king.",
                ),
            ],
        },
        Concept {
            id: "rook-endings",
            name: "Rook Endgames",
            description: "Rook endgames are the most common type at higher levels. They require precision and understanding of key principles.",
            key_points: &[
                "Rooks belong behind passed pawns (yours or the opponent's)",
                "The Lucena position is a winning position with a rook and pawn vs rook",
                "The Philidor position is a drawing position for the defender with a rook vs rook and pawn",
                "Cut off the enemy king vertically when possible",
                "Avoid passive rook placement as it limits your options",
            ],
            explanation: None,
            positions: &[
                pos(
                    "3r4/8/8/8/8/5K2/4P3/4R3 w - - 0 1",
                    "Rooks Behind Pawns",
                    "White's rook is ideally placed behind its passed pawn, ready to support its advance.",
                ),
                pos(
                    "8/8/8/8/3k4/8/3P4/3K1R2 w - - 0 1",
                    "Lucena Position",
                    "This is the famous Lucena position. White can win by building a 'bridge' for their king.",
                ),
                pos(
                    "8/8/8/8/3k4/8/3P4/R3K3 b - - 0 1",
                    "Philidor Defense",
                    "Black can draw by keeping their rook on the 3rd rank, using the Philidor defense technique.",
                ),
            ],
        },
        Concept {
            id: "minor-piece",
            name: "Minor Piece Endgames",
            description: "Understanding the strengths and weaknesses of bishops and knights in the endgame is crucial.",
            key_points: &[
                "Bishop pair advantage increases in open positions",
                "Knight vs bishop outcomes depend on pawn structure",
                "Knights are better with pawns on both sides of the board",
                "Bishops are stronger in open positions with pawns on opposite sides",
                "A bishop can control the promotion square of a pawn of the opposite color",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/5k2/8/8/5P2/4KB2 w - - 0 1",
                    "Bishop vs Knight Endgame",
                    "With pawns on one side, the bishop is generally stronger than a knight.",
                ),
                pos(
                    "8/8/8/8/3Bk3/8/4P3/4K3 w - - 0 1",
                    "Bishop Controlling Promotion Square",
                    "The bishop controls the promotion square, allowing the king to capture the pawn safely.",
                ),
                pos(
                    "8/8/8/3N4/2k1K3/8/8/8 w - - 0 1",
                    "Knight Outpost",
                    "A centralized knight can control important squares and restrict the enemy king's movement.",
                ),
            ],
        },
        Concept {
            id: "queen-endings",
            name: "Queen Endgames",
            description: "Queen endgames are complex but follow certain principles that can help navigate their complications.",
            key_points: &[
                "Queens are powerful but can be vulnerable to checks from minor pieces",
                "A queen cannot stop a passed pawn supported by its king without giving perpetual check",
                "Queen vs pawn on 7th rank often leads to a draw by stalemate or perpetual check",
                "When ahead in material, trading queens often simplifies to a winning position",
                "When behind, keeping queens on the board increases practical chances",
            ],
            explanation: None,
            positions: &[
                pos(
                    "8/8/8/8/8/5k2/4p3/4K1Q1 w - - 0 1",
                    "Queen vs Pawn",
                    "White can draw against the advanced pawn by giving perpetual check to Black's king.",
                ),
                pos(
                    "8/8/8/8/8/3k4/3p4/3K1Q2 b - - 0 1",
                    "Stalemate Potential",
                    "Black to move can advance to d1 promoting with stalemate, securing a draw.",
                ),
                pos(
                    "8/8/8/2k5/8/2K5/4P3/8 w - - 0 1",
                    "King and Pawn vs King",
                    "After trading queens, this position is winning for White due to the opposition advantage.",
                ),
            ],
        },
    ],
};

static PLANNING: Topic = Topic {
    id: TopicId::Planning,
    practice: false,
    title: "Strategic Planning",
    intro: "Strategic planning is a fundamental skill that separates intermediate players from beginners. Instead of making moves that just look good, you'll learn to create coherent plans based on positional understanding.",
    points_heading: "Steps",
    explanation_heading: "Example",
    concepts: &[
        Concept {
            id: "evaluate-position",
            name: "Positional Evaluation",
            description: "Before creating a plan, you need to objectively evaluate the current position.",
            key_points: &[
                "Assess pawn structure (weaknesses, strengths, islands)",
                "Evaluate piece activity and coordination",
                "Consider king safety for both sides",
                "Look for open files, diagonals, and potential outposts",
                "Identify which side has a space advantage",
            ],
            explanation: Some(
                "In a position with an isolated queen's pawn for your opponent, your plan might revolve around blockading and attacking this weakness.",
            ),
            positions: &[
                pos(
                    "r1bqk2r/1ppp1ppp/p1n2n2/4p3/B3P3/5N2/PPPP1PPP/RNBQ1RK1 w kq - 0 1",
                    "Evaluation Example",
                    "White has better development and the bishop pair. Black has a solid position but less space.",
                ),
                pos(
                    "r2qk2r/ppp1bppp/2np1n2/4p3/4P1b1/2PP1N1P/PPB2PP1/RNBQR1K1 b kq - 0 1",
                    "Identifying Weaknesses",
                    "Black should note White's potential weakening of the kingside with h3, which creates potential tactical opportunities.",
                ),
            ],
        },
        Concept {
            id: "identify-advantages",
            name: "Identify Your Advantages",
            description: "Every position has certain characteristics favoring one side. Identify yours to leverage them.",
            key_points: &[
                "Material advantage (having more or better pieces)",
                "Better pawn structure (fewer weaknesses)",
                "Superior piece coordination or activity",
                "Control of key squares or lines",
                "Development lead or initiative",
            ],
            explanation: Some(
                "If you have a bishop pair in an open position, your plan might involve keeping the position fluid and using your bishops' long-range power.",
            ),
            positions: &[
                pos(
                    "r2qkb1r/pp2pppp/2n2n2/3p1b2/3P4/2N1PN2/PP3PPP/R1BQKB1R w KQkq - 0 1",
                    "Identifying Advantages",
                    "White has more central space and slightly better development. A plan based on expanding in the center would be logical.",
                ),
                pos(
                    "r1bqk2r/pp2bppp/2n1pn2/3p4/3P4/2NBP3/PP3PPP/R1BQK1NR w KQkq - 0 1",
                    "Bishop Pair Advantage",
                    "White has the bishop pair in an open position. The plan should involve keeping the position fluid to maximize this advantage.",
                ),
            ],
        },
        Concept {
            id: "target-weaknesses",
            name: "Identify Opponent's Weaknesses",
            description: "Successful plans often target specific weaknesses in your opponent's position.",
            key_points: &[
                "Look for weak pawns or squares",
                "Identify poorly placed pieces",
                "Check for king safety issues",
                "Notice any overloaded pieces",
                "Consider structural weaknesses like doubled or isolated pawns",
            ],
            explanation: Some(
                "If your opponent has weakened kingside pawn structure, you might plan for piece sacrifice on h7 or g7 to expose their king.",
            ),
            positions: &[
                pos(
                    "r1bq1rk1/pp3ppp/2nbpn2/3p4/3P4/1P1BPN2/P1P2PPP/RN1Q1RK1 w - - 0 1",
                    "Weak Square",
                    "Black has a weakness on e6. White should plan to target this square, potentially with a knight maneuver to f4.",
                ),
                pos(
                    "r2qk2r/pp1nbppp/4pn2/3p4/3P1B2/2NB4/PP3PPP/R2QK2R w KQkq - 0 1",
                    "Backward Pawn",
                    "Black has a backward e-pawn. White's plan could involve increasing pressure on this weakness.",
                ),
            ],
        },
        Concept {
            id: "prophylaxis",
            name: "Prophylaxis",
            description: "Sometimes the best plan is to prevent your opponent's plan.",
            key_points: &[
                "Ask yourself: 'What does my opponent want to do next?'",
                "Identify ways to prevent or complicate their ideal plan",
                "Secure key squares before your opponent can use them",
                "Eliminate potential counterplay",
                "Force your opponent into a passive defensive stance",
            ],
            explanation: Some(
                "If you notice your opponent is preparing a knight outpost on d5, you might plan to control that square with pawns or pieces first.",
            ),
            positions: &[
                pos(
                    "rnbqk2r/pp3ppp/4pn2/2pp4/1bPP4/2N1P3/PP3PPP/R1BQKBNR w KQkq - 0 1",
                    "Preventing Activity",
                    "White should play a3, preventing Black's bishop from retreating to a5 and maintaining pressure on it.",
                ),
                pos(
                    "r1bq1rk1/pp2bppp/2n1pn2/3p4/3P4/2N1PN2/PP1B1PPP/R1BQK2R w KQ - 0 1",
                    "Securing Key Squares",
                    "White should consider Nb5 to secure the d6 outpost before Black can play c6 to prevent it.",
                ),
            ],
        },
        Concept {
            id: "improve-worst-piece",
            name: "Improve Your Worst Piece",
            description: "A chain is only as strong as its weakest link. Identify and improve your least active piece.",
            key_points: &[
                "Identify which of your pieces is contributing least",
                "Find a better square for that piece",
                "Create a plan to reposition it",
                "Ensure other pieces support this reorganization",
                "Don't weaken your position just to improve one piece",
            ],
            explanation: Some(
                "If you have a knight on a5 that has no good squares to go to, your plan might be to maneuver it via c6 to e5 where it's more centralized.",
            ),
            positions: &[
                pos(
                    "r1bqr1k1/pp3ppp/2n2n2/8/1b1NN3/4B3/PP3PPP/R2Q1RK1 w - - 0 1",
                    "Improving a Knight",
                    "White's knight on d4 is well placed, but the one on e4 could be improved by moving to c5 or f6.",
                ),
                pos(
                    "r4rk1/1bq1bppp/pp2pn2/8/P1BP4/2P1BN2/5PPP/R2Q1RK1 b - - 0 1",
                    "Rook Activation",
                    "Black's worst piece is the a8 rook. A plan involving ...a5 followed by ...Ra7-d7 would improve it.",
                ),
            ],
        },
    ],
};

static OPENING_PRINCIPLES: Topic = Topic {
    id: TopicId::OpeningPrinciples,
    practice: true,
    title: "Opening Principles",
    intro: "Learn the fundamental concepts of chess openings.",
    points_heading: "Principles",
    explanation_heading: "",
    concepts: &[Concept {
        id: "fundamentals",
        name: "Fundamentals",
        description: "Three habits that carry every opening. Try them on the board: claim the center, bring out a knight and a bishop, then castle.",
        key_points: &[
            "Control the center of the board.",
            "Develop your pieces efficiently.",
            "Ensure king safety through castling.",
        ],
        explanation: None,
        positions: &[],
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::BoardSnapshot;

    const TOPICS: [TopicId; 5] = [
        TopicId::TacticalPatterns,
        TopicId::PositionalPlay,
        TopicId::EndgameBasics,
        TopicId::Planning,
        TopicId::OpeningPrinciples,
    ];

    #[test]
    fn test_every_tier_has_six_cards() {
        for tier in Tier::ALL {
            assert_eq!(tier.cards().len(), 6, "{}", tier.name());
        }
    }

    #[test]
    fn test_every_topic_is_reachable_from_a_card() {
        for id in TOPICS {
            let reachable = Tier::ALL
                .iter()
                .flat_map(|t| t.cards())
                .any(|c| c.page == Some(Page::Topic(id)));
            assert!(reachable, "{id:?}");
        }
    }

    #[test]
    fn test_topics_are_well_formed() {
        for id in TOPICS {
            let topic = topic(id);
            assert_eq!(topic.id, id);
            assert!(!topic.concepts.is_empty());
            for concept in topic.concepts {
                assert!(topic.practice || !concept.positions.is_empty(), "{}", concept.id);
                for position in concept.positions {
                    assert!(
                        BoardSnapshot::from_fen(position.fen).is_ok(),
                        "{}: {}",
                        concept.id,
                        position.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_check_positions_parse() {
        assert_eq!(CHECK_POSITIONS.len(), 6);
        for position in CHECK_POSITIONS {
            assert!(BoardSnapshot::from_fen(position.fen).is_ok(), "{}", position.id);
        }
    }

    #[test]
    fn test_four_tips_per_piece() {
        for kind in PieceKind::ALL {
            assert!(!piece_description(kind).is_empty());
            assert!(piece_tips(kind).iter().all(|tip| !tip.is_empty()));
        }
    }

    #[test]
    fn test_page_round_trips_through_json() {
        let page = Page::Topic(TopicId::EndgameBasics);
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"topic":"endgame_basics"}"#);
        assert_eq!(serde_json::from_str::<Page>(&json).unwrap(), page);
    }

    #[test]
    fn test_lesson_pages() {
        assert!(Page::Pieces.is_lesson());
        assert!(Page::Topic(TopicId::Planning).is_lesson());
        assert!(!Page::Contact.is_lesson());
        assert_eq!(Page::Topic(TopicId::Planning).title(), "Strategic Planning");
    }
}

//! Emotion vocabulary.
//!
//! The "How We Feel" emotion catalog used when tagging journal activities.
//! Like [`ValueName`](crate::ValueName) it is a closed set with attached
//! descriptions; unknown names fail with
//! [`ValidationError::UnknownEmotion`](crate::error::ValidationError).

use serde::{Deserialize, Serialize};

use crate::catalog::closed_catalog;

closed_catalog! {
    /// An emotion from the How We Feel catalog.
    ///
    /// The canonical name is the title-cased label (`"At Ease"`).
    pub enum EmotionName (UnknownEmotion) {
        Pleased => "Pleased", "to afford or give pleasure or satisfaction";
        Pleasant => "Pleasant", "having qualities that tend to give pleasure : agreeable";
        Cheerful => "Cheerful", "full of good spirits : merry";
        Energized => "Energized", "to make energetic, vigorous, or active";
        Excited => "Excited", "having, showing, or characterized by a heightened state of energy, enthusiasm, eagerness, etc. : feeling or showing excitement";
        Surprised => "Surprised", "feeling or showing surprise because of something unexpected";
        Awe => "Awe", "an emotion variously combining dread, veneration, and wonder that is inspired by authority or by the sacred or sublime";
        Determined => "Determined", "having reached a decision : firmly resolved";
        Eager => "Eager", "marked by enthusiastic or impatient desire or interest";
        Curious => "Curious", "marked by desire to investigate and learn";
        Focused => "Focused", "to cause to be concentrated";
        Playful => "Playful", "full of play : frolicsome, sportive";
        Delighted => "Delighted", "delightful";
        Alive => "Alive", "having life : not dead or inanimate";
        Upbeat => "Upbeat", "an unaccented beat or portion of a beat in a musical measure; specifically : the last beat of the measure";
        Enthusiastic => "Enthusiastic", "filled with or marked by enthusiasm";
        Stressful => "Stressful", "full of or tending to induce stress";
        Exhilarated => "Exhilarated", "very happy and excited or elated";
        Thrilled => "Thrilled", "extremely pleased and excited";
        Amazed => "Amazed", "feeling or showing great surprise or wonder";
        Joyful => "Joyful", "experiencing, causing, or showing joy : happy";
        Happy => "Happy", "favored by luck or fortune : fortunate";
        Confident => "Confident", "full of conviction : certain";
        Wishful => "Wishful", "expressive of a wish : hopeful";
        Hopeful => "Hopeful", "having qualities which inspire hope";
        Engaged => "Engaged", "involved in activity : occupied, busy";
        Motivated => "Motivated", "provided with a motive : having an incentive or a strong desire to do well or succeed in some pursuit";
        Productive => "Productive", "having the quality or power of producing especially in abundance";
        Inspired => "Inspired", "outstanding or brilliant in a way or to a degree suggestive of divine inspiration";
        Elated => "Elated", "marked by high spirits : exultant";
        Ecstatic => "Ecstatic", "of, relating to, or marked by ecstasy";
        Empowered => "Empowered", "having the knowledge, confidence, means, or ability to do things or make decisions for oneself";
        Proud => "Proud", "feeling or showing pride: such as";
        Optimistic => "Optimistic", "of, relating to, or characterized by optimism : feeling or showing hope for the future";
        Challenged => "Challenged", "presented with difficulties (as by a disability)";
        Accomplished => "Accomplished", "proficient as the result of practice or training; also : skillfully done or produced";
        Blissful => "Blissful", "full of, marked by, or causing complete happiness";
        Connected => "Connected", "joined or linked together";
        Grateful => "Grateful", "appreciative of benefits received";
        Moved => "Moved", "to go or pass to another place or in a certain direction with a continuous motion";
        Blessed => "Blessed", "held in reverence : venerated";
        Serene => "Serene", "marked by or suggestive of utter calm and unruffled repose or quietude";
        Satisfied => "Satisfied", "pleased or content with what has been experienced or received";
        Secure => "Secure", "free from danger";
        Accepted => "Accepted", "regarded favorably : given approval or acceptance; especially : generally approved or used";
        Valued => "Valued", "having a value or values especially of a specified kind or number often used in combination";
        Loved => "Loved", "to hold dear : cherish";
        Fulfilled => "Fulfilled", "feeling happiness and satisfaction : feeling that one's abilities and talents are being fully used";
        Respected => "Respected", "to consider worthy of high regard : esteem";
        Supported => "Supported", "to endure bravely or quietly : bear";
        Included => "Included", "to take in or comprise as a part of a whole or group";
        Content => "Content", "something contained usually used in plural";
        Safe => "Safe", "free from harm or risk : unhurt";
        Relieved => "Relieved", "experiencing or showing relief especially from anxiety or pent-up emotions";
        Thankful => "Thankful", "conscious of benefit received";
        Balanced => "Balanced", "being in a state of balance : having different parts or elements properly or effectively arranged, proportioned, regulated, considered, etc.";
        Empathetic => "Empathetic", "involving, characterized by, or based on empathy";
        Compassionate => "Compassionate", "having or showing compassion : sympathetic";
        Appreciated => "Appreciated", "to grasp the nature, worth, quality, or significance of";
        Understood => "Understood", "fully apprehended";
        AtEase => "At Ease", "the state of being comfortable: such as";
        Thoughtful => "Thoughtful", "absorbed in thought : meditative";
        Chill => "Chill", "a sensation of cold accompanied by shivering (as due to illness) usually plural";
        Comfortable => "Comfortable", "affording or enjoying contentment and security";
        Peaceful => "Peaceful", "peaceable";
        Tranquil => "Tranquil", "free from agitation of mind or spirit";
        Carefree => "Carefree", "free from care: such as";
        Mellow => "Mellow", "tender and sweet because of ripeness";
        Sympathetic => "Sympathetic", "existing or operating through an affinity, interdependence, or mutual association";
        Relaxed => "Relaxed", "freed from or lacking in precision or stringency";
        Good => "Good", "of a favorable character or tendency";
        Calm => "Calm", "a period or condition of freedom from storms, high winds, or rough activity of water";
        Bored => "Bored", "filled with or characterized by boredom";
        Tired => "Tired", "drained of strength and energy : fatigued often to the point of exhaustion";
        Fatigued => "Fatigued", "drained of strength and energy : affected by fatigue";
        Disengaged => "Disengaged", "detached";
        Apathetic => "Apathetic", "affected by, characterized by, or displaying apathy : having or showing little or no interest, concern, or emotion";
        Helpless => "Helpless", "lacking protection or support : defenseless";
        Exhausted => "Exhausted", "completely or almost completely depleted of resources or contents";
        Lonely => "Lonely", "being without company : lone";
        Discouraged => "Discouraged", "to deprive of courage or confidence : dishearten";
        Sad => "Sad", "affected with or expressive of grief or unhappiness : downcast";
        Meh => "Meh", "used to express indifference or mild disappointment";
        Down => "Down", "toward or in a lower physical position";
        Disheartened => "Disheartened", "to cause to lose hope, enthusiasm, or courage : to cause to lose spirit or morale";
        Disappointed => "Disappointed", "defeated in expectation or hope";
        Forlorn => "Forlorn", "bereft, forsaken";
        Spent => "Spent", "used up : consumed";
        Nostalgic => "Nostalgic", "feeling or inspiring nostalgia: such as";
        BurnedOut => "Burned Out", "worn-out; also : exhausted";
        Glum => "Glum", "broodingly morose";
        Alienated => "Alienated", "feeling withdrawn or separated from others or from society as a whole : affected by alienation";
        Excluded => "Excluded", "to prevent or restrict the entrance of";
        Disconnected => "Disconnected", "not connected : separate; also : incoherent";
        Lost => "Lost", "ruined or destroyed physically or morally";
        Insecure => "Insecure", "deficient in assurance : beset by fear and anxiety";
        Trapped => "Trapped", "to catch or take in or as if in a trap : entrap";
        Ashamed => "Ashamed", "feeling shame, guilt, or disgrace";
        Vulnerable => "Vulnerable", "capable of being physically or emotionally wounded";
        Numb => "Numb", "unable to feel anything in a particular part of your body especially as a result of cold or anesthesia";
        Hopeless => "Hopeless", "having no expectation of good or success : despairing";
        Despair => "Despair", "utter loss of hope";
        Miserable => "Miserable", "being in a pitiable state of distress or unhappiness (as from want or shame)";
        Depressed => "Depressed", "low in spirits : sad; especially : affected by psychological depression";
        Guilty => "Guilty", "justly chargeable with or responsible for a usually grave breach of conduct or a crime";
        Pessimistic => "Pessimistic", "of, relating to, or characterized by pessimism : gloomy";
        Humiliated => "Humiliated", "to reduce (someone) to a lower position in one's own eyes or others' eyes : to make (someone) ashamed or embarrassed : mortify";
        Disgusted => "Disgusted", "feeling or showing disgust : disturbed physically or mentally by something distasteful";
        Contempt => "Contempt", "the act of despising : the state of mind of one who despises : disdain";
        Envious => "Envious", "feeling or showing envy";
        Jealous => "Jealous", "hostile toward a rival or one believed to enjoy an advantage : envious";
        Furious => "Furious", "exhibiting or goaded by anger";
        Livid => "Livid", "discolored by bruising : black-and-blue";
        Enraged => "Enraged", "to fill with rage : anger";
        Terrified => "Terrified", "to drive or impel by menacing : scare";
        Irate => "Irate", "roused to ire";
        Frightened => "Frightened", "feeling fear : made to feel afraid";
        Scared => "Scared", "thrown into or being in a state of fear, fright, or panic";
        Repulsed => "Repulsed", "to drive or beat back : repel";
        Troubled => "Troubled", "concerned, worried";
        Worried => "Worried", "mentally troubled or concerned : feeling or showing concern or anxiety about what is happening or might happen";
        Frustrated => "Frustrated", "feeling, showing, or characterized by frustration: such as";
        Angry => "Angry", "feeling or showing anger";
        Anxious => "Anxious", "characterized by extreme uneasiness of mind or brooding fear about some contingency : worried";
        Overwhelmed => "Overwhelmed", "overcome by force or numbers";
        Panicked => "Panicked", "to affect with panic";
        Shocked => "Shocked", "affected by shock : stricken with sudden mental or emotional disturbance";
        Stressed => "Stressed", "subjected to or affected by stress";
        Apprehensive => "Apprehensive", "viewing the future with anxiety or alarm : feeling or showing fear or apprehension about the future";
        Jittery => "Jittery", "suffering from the jitters";
        Embarrassed => "Embarrassed", "feeling or showing a state of self-conscious confusion and distress";
        Nervous => "Nervous", "timid, apprehensive";
        Peeved => "Peeved", "to make peevish or resentful : annoy";
        Concerned => "Concerned", "anxious, worried";
        Fomo => "Fomo", "fear of missing out : fear of not being included in something (such as an interesting or enjoyable activity) that others are experiencing";
        Irritated => "Irritated", "subjected to irritation; especially : roughened, reddened, or inflamed by an irritant";
        Annoyed => "Annoyed", "feeling or showing angry irritation";
        Impassioned => "Impassioned", "filled with passion or zeal : showing great warmth or intensity of feeling";
        Hyper => "Hyper", "high-strung, excitable; also : highly excited";
        Pressured => "Pressured", "to apply pressure to";
        Restless => "Restless", "lacking or denying rest : uneasy";
        Confused => "Confused", "being perplexed or disconcerted";
        Tense => "Tense", "stretched tight : made taut : rigid";
        Uneasy => "Uneasy", "causing physical or mental discomfort";
    }
}

/// An emotion together with its description, as exchanged with the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHwfEmotion")]
pub struct HwfEmotion {
    /// The emotion.
    pub name: EmotionName,
    /// Catalog description of the emotion.
    pub desc: String,
}

impl HwfEmotion {
    /// Creates an emotion with its catalog description.
    #[must_use]
    pub fn new(name: EmotionName) -> Self {
        Self {
            name,
            desc: name.description().to_string(),
        }
    }
}

impl From<EmotionName> for HwfEmotion {
    fn from(name: EmotionName) -> Self {
        Self::new(name)
    }
}

// `desc` is ignored on input; the catalog text is authoritative.
#[derive(Deserialize)]
struct RawHwfEmotion {
    name: EmotionName,
}

impl From<RawHwfEmotion> for HwfEmotion {
    fn from(raw: RawHwfEmotion) -> Self {
        Self::new(raw.name)
    }
}

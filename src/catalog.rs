//! Static study content: the curated story and poem collections.
//!
//! The collections are fixed at build time and read-only; the query engine
//! only ever derives views over them. Field names stay camelCase on the
//! wire, so client-supplied sort fields (`readTime`, `likes`) resolve
//! without translation.

use crate::query::Record;
use serde::{Deserialize, Serialize};

/// A short story in the study catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub category: String,
    pub read_time: String,
    pub cover_image: String,
}

/// A poem in the study catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub preview: String,
    pub category: String,
    pub read_time: String,
    pub likes: u32,
    pub has_q_a: bool,
    pub has_summary: bool,
}

impl Record for Story {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.excerpt]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "author" => Some(self.author.clone()),
            "excerpt" => Some(self.excerpt.clone()),
            "category" => Some(self.category.clone()),
            "readTime" => Some(self.read_time.clone()),
            _ => None,
        }
    }

    fn numeric_fields() -> &'static [&'static str] {
        &["id"]
    }
}

impl Record for Poem {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.preview]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "author" => Some(self.author.clone()),
            "preview" => Some(self.preview.clone()),
            "category" => Some(self.category.clone()),
            "readTime" => Some(self.read_time.clone()),
            "likes" => Some(self.likes.to_string()),
            _ => None,
        }
    }

    fn numeric_fields() -> &'static [&'static str] {
        &["id", "likes"]
    }
}

/// Story category enumeration, `"all"` sentinel first
pub fn story_categories() -> Vec<(&'static str, &'static str)> {
    vec![
        ("all", "सभी कहानियाँ"),
        ("social", "सामाजिक"),
        ("family", "पारिवारिक"),
        ("satire", "व्यंग्य"),
        ("patriotic", "देशभक्ति"),
        ("philosophical", "दार्शनिक"),
        ("psychological", "मनोवैज्ञानिक"),
        ("contemporary", "समकालीन"),
        ("artistic", "कलात्मक"),
    ]
}

/// Poem category enumeration, `"all"` sentinel first
pub fn poem_categories() -> Vec<(&'static str, &'static str)> {
    vec![
        ("all", "सभी कविताएँ"),
        ("भक्ति", "भक्ति"),
        ("नीति", "नीति"),
        ("राष्ट्रीय", "राष्ट्रीय"),
        ("देशभक्ति", "देशभक्ति"),
        ("प्रकृति", "प्रकृति"),
        ("सामाजिक", "सामाजिक"),
        ("बाल", "बाल"),
        ("पारिवारिक", "पारिवारिक"),
    ]
}

fn story(
    id: u32,
    title: &str,
    author: &str,
    excerpt: &str,
    category: &str,
    read_time: &str,
    cover_image: &str,
) -> Story {
    Story {
        id,
        title: title.to_string(),
        author: author.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        cover_image: cover_image.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn poem(
    id: u32,
    title: &str,
    author: &str,
    preview: &str,
    category: &str,
    read_time: &str,
    likes: u32,
) -> Poem {
    Poem {
        id,
        title: title.to_string(),
        author: author.to_string(),
        preview: preview.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        likes,
        has_q_a: true,
        has_summary: true,
    }
}

/// The curated story collection
pub fn stories() -> Vec<Story> {
    vec![
        story(
            1,
            "बात अठन्नी की",
            "सुदर्शन",
            "ईमानदारी और कठिन परिस्थितियों में भी वचन का पालन करने के मूल्य के बारे में एक शक्तिशाली कहानी।",
            "social",
            "18 min",
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            2,
            "काकी",
            "सियाराम शरण गुप्ता",
            "एक मार्मिक कहानी जो पारिवारिक संबंधों और परंपरागत घरों में बुजुर्ग महिलाओं के साथ व्यवहार की पड़ताल करती है।",
            "family",
            "22 min",
            "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            3,
            "महायज्ञ का पुरस्कार",
            "यशपाल",
            "धार्मिक समारोहों और सामाजिक प्रथाओं के भीतर विरोधाभासों पर एक व्यंग्यात्मक दृष्टिकोण।",
            "satire",
            "15 min",
            "https://images.unsplash.com/photo-1519791883288-dc8bd696e667?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            4,
            "नेता जी का चश्मा",
            "स्वयं प्रकाश",
            "एक नम्र दुकानदार और एक राष्ट्रीय नायक के साथ उसके अनूठे संबंध के बारे में एक छूने वाली कहानी।",
            "patriotic",
            "12 min",
            "https://images.unsplash.com/photo-1575936123452-b67c3203c357?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            5,
            "अपना अपना भाग्य",
            "जैनेंद्र कुमार",
            "भाग्य की दार्शनिक खोज और लोगों के भाग्य कैसे अप्रत्याशित तरीकों से जुड़े होते हैं।",
            "philosophical",
            "20 min",
            "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            6,
            "बड़े घर की बेटी",
            "प्रेमचंद",
            "वर्ग भेद और पारंपरिक समाज में महिलाओं द्वारा सामना किए जाने वाले संघर्षों की जांच करती एक क्लासिक कहानी।",
            "social",
            "25 min",
            "https://images.unsplash.com/photo-1517841905240-472988babdf9?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            7,
            "सन्देह",
            "जयशंकर प्रसाद",
            "मानवीय संबंधों और विश्वास की भावना पर एक सूक्ष्म कहानी जो पाठकों को सोचने पर मजबूर करती है।",
            "psychological",
            "16 min",
            "https://images.unsplash.com/photo-1490633874781-1c63cc424610?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            8,
            "भोला में खोया आदमी",
            "शीलाधर शर्मा 'पद्मदीप'",
            "आधुनिक समाज में व्यक्ति की पहचान और अस्तित्व की खोज पर एक मनोवैज्ञानिक कहानी।",
            "contemporary",
            "14 min",
            "https://images.unsplash.com/photo-1517841905240-472988babdf9?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            9,
            "भेद और प्रभेद",
            "हरि शंकर परसाई",
            "समाज के विभिन्न वर्गों और उनके बीच के अंतर पर तीखा व्यंग्य करती एक मार्मिक कहानी।",
            "satire",
            "18 min",
            "https://images.unsplash.com/photo-1527631746610-bca00a040d60?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
        story(
            10,
            "दो कलाकार",
            "मन्नू भंडारी",
            "कला, सृजन और कलाकारों के आंतरिक संघर्ष पर प्रकाश डालती एक प्रेरणादायक कहानी।",
            "artistic",
            "20 min",
            "https://images.unsplash.com/photo-1513364776144-60967b0f800f?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
        ),
    ]
}

/// The curated poem collection
pub fn poems() -> Vec<Poem> {
    vec![
        poem(
            1,
            "साखी",
            "कबीर दास",
            "माला फेरत जुग भया, फिरा न मन का फेर। कर का मनका डारि दे, मन का मनका फेर॥",
            "भक्ति",
            "10 min",
            342,
        ),
        poem(
            2,
            "गिरिधर की कुंडलिया",
            "गिरिधर कवि राय",
            "तरुवर फल नहिं खात है, सरवर पियत न पान। कहि गिरिधर कविराय यों, परमारथ के दान॥",
            "नीति",
            "12 min",
            305,
        ),
        poem(
            3,
            "स्वर्ग बना सकते है",
            "रामधारी सिंह दिनकर",
            "धरती जो अपना खून पचा सकती है वह अपने वक्ष पर स्वर्ग बना सकती है।",
            "राष्ट्रीय",
            "15 min",
            426,
        ),
        poem(
            4,
            "वह जन्मभूमि मेरी",
            "सोहनलाल द्विवेदी",
            "वह जन्मभूमि मेरी! वह जन्मभूमि मेरी! पहचानती न जिसको हो आज दुनिया सारी।",
            "देशभक्ति",
            "14 min",
            389,
        ),
        poem(
            5,
            "मेघ आए",
            "सर्वेश्वर दयाल सक्सेना",
            "मेघ आए बड़े बन-ठन के सँवर के, आँगन में बिखराये हैं रितु के पाहुन से...",
            "प्रकृति",
            "11 min",
            312,
        ),
        poem(
            6,
            "सूर के पद",
            "सूरदास",
            "मैया मोरी, मैं नहिं माखन खायो। ख्याल परै यह मुख दधि लपटायो॥",
            "भक्ति",
            "13 min",
            356,
        ),
        poem(
            7,
            "विनय के पद",
            "तुलसीदास",
            "विनय न मानत जानकी, जदपि कही बहु बात। तेहि अवसर चलि आइगे, पवनसुत बलि जात॥",
            "भक्ति",
            "10 min",
            298,
        ),
        poem(
            8,
            "भिक्षुक",
            "सूर्यकांत त्रिपाठी 'निराला'",
            "वह आता, दो टूक कलेजे के करता पछताता पथ पर आता।",
            "सामाजिक",
            "12 min",
            267,
        ),
        poem(
            9,
            "बचपन हमारा कम है",
            "शिवमंगल सिंह 'सुमन'",
            "हम बाल बाल हैं, हम बचपन के चंदा हैं, महान हम हैं, हम समुंदर से भी गहरे हैं।",
            "बाल",
            "9 min",
            325,
        ),
        poem(
            10,
            "माता मंदिर की ओर",
            "सुभद्रा कुमारी चौहान",
            "बालक को उठा कर निज वक्ष से लगाए हुए, माता बढ़ी चली जाती मंदिर की ओर।",
            "पारिवारिक",
            "11 min",
            352,
        ),
    ]
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scoring::weights::WEIGHT_TABLE;

/// Closed set of site profiles the quiz can recommend. Also the join key
/// between scoring output and the recommendation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteCategory {
    Professional,
    Portfolio,
    Ecommerce,
    Landing,
    Business,
    Startup,
}

impl SiteCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SiteCategory::Professional => "professional",
            SiteCategory::Portfolio => "portfolio",
            SiteCategory::Ecommerce => "ecommerce",
            SiteCategory::Landing => "landing",
            SiteCategory::Business => "business",
            SiteCategory::Startup => "startup",
        }
    }

    /// Declaration order; scoring tie-breaks depend on it.
    pub const fn ordered() -> [SiteCategory; 6] {
        [
            SiteCategory::Professional,
            SiteCategory::Portfolio,
            SiteCategory::Ecommerce,
            SiteCategory::Landing,
            SiteCategory::Business,
            SiteCategory::Startup,
        ]
    }

    pub fn from_label(value: &str) -> Option<Self> {
        SiteCategory::ordered()
            .into_iter()
            .find(|category| category.label() == value)
    }
}

/// Answers keyed by question id, holding the chosen option id (not its value).
pub type AnswerSet = BTreeMap<u8, String>;

/// One selectable answer. `value` is the scoring signal; `label` is what the
/// visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    #[serde(rename = "text")]
    pub label: &'static str,
    pub value: &'static str,
}

/// A catalog question. `id` is the 1-based position and the navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u8,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn option_by_id(&self, option_id: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

pub fn question_catalog() -> &'static [QuizQuestion] {
    QUIZ_QUESTIONS
}

pub fn find_question(question_id: u8) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS
        .iter()
        .find(|question| question.id == question_id)
}

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        prompt: "Qual é a sua área de atuação?",
        options: &[
            QuizOption {
                id: "1a",
                label: "Sou um profissional autônomo (médico, advogado, etc.)",
                value: "professional",
            },
            QuizOption {
                id: "1b",
                label: "Sou artista ou trabalho com design/criação",
                value: "creative",
            },
            QuizOption {
                id: "1c",
                label: "Tenho uma pequena empresa ou comércio",
                value: "business",
            },
            QuizOption {
                id: "1d",
                label: "Quero vender produtos pela internet",
                value: "ecommerce",
            },
            QuizOption {
                id: "1e",
                label: "Estou começando meu negócio agora",
                value: "startup",
            },
        ],
    },
    QuizQuestion {
        id: 2,
        prompt: "O que você quer que as pessoas façam ao visitar seu site?",
        options: &[
            QuizOption {
                id: "2a",
                label: "Me ligar ou enviar mensagem para contratar meus serviços",
                value: "professional",
            },
            QuizOption {
                id: "2b",
                label: "Ver meus trabalhos e projetos",
                value: "portfolio",
            },
            QuizOption {
                id: "2c",
                label: "Comprar produtos online",
                value: "ecommerce",
            },
            QuizOption {
                id: "2d",
                label: "Conhecer melhor minha empresa e serviços",
                value: "business",
            },
            QuizOption {
                id: "2e",
                label: "Preencher um formulário de contato",
                value: "landing",
            },
        ],
    },
    QuizQuestion {
        id: 3,
        prompt: "O que é mais importante para você em um site?",
        options: &[
            QuizOption {
                id: "3a",
                label: "Que seja bonito e passe credibilidade",
                value: "professional",
            },
            QuizOption {
                id: "3b",
                label: "Que destaque bem minhas fotos e trabalhos",
                value: "gallery",
            },
            QuizOption {
                id: "3c",
                label: "Que seja fácil de comprar e pagar",
                value: "ecommerce",
            },
            QuizOption {
                id: "3d",
                label: "Que apareça bem nas buscas do Google",
                value: "seo",
            },
            QuizOption {
                id: "3e",
                label: "Que seja simples e carregue rápido",
                value: "basic",
            },
        ],
    },
    QuizQuestion {
        id: 4,
        prompt: "Como você pretende se comunicar com seus clientes?",
        options: &[
            QuizOption {
                id: "4a",
                label: "Principalmente por telefone e WhatsApp",
                value: "contact",
            },
            QuizOption {
                id: "4b",
                label: "Através de um formulário de contato no site",
                value: "form",
            },
            QuizOption {
                id: "4c",
                label: "Por redes sociais integradas ao site",
                value: "social",
            },
            QuizOption {
                id: "4d",
                label: "Sistema de agendamento online",
                value: "appointment",
            },
            QuizOption {
                id: "4e",
                label: "Chat ao vivo no site",
                value: "chat",
            },
        ],
    },
    QuizQuestion {
        id: 5,
        prompt: "Quanto tempo você tem para cuidar do seu site?",
        options: &[
            QuizOption {
                id: "5a",
                label: "Quase nenhum, preciso que seja automático",
                value: "lowmaintenance",
            },
            QuizOption {
                id: "5b",
                label: "Posso atualizar de vez em quando",
                value: "occasional",
            },
            QuizOption {
                id: "5c",
                label: "Tenho interesse em atualizar regularmente",
                value: "regular",
            },
            QuizOption {
                id: "5d",
                label: "Quero me envolver bastante com o site",
                value: "highinvolvement",
            },
            QuizOption {
                id: "5e",
                label: "Prefiro que alguém faça tudo para mim",
                value: "outsource",
            },
        ],
    },
    QuizQuestion {
        id: 6,
        prompt: "Qual a importância do seu site para seu negócio?",
        options: &[
            QuizOption {
                id: "6a",
                label: "É apenas uma presença online básica",
                value: "basic",
            },
            QuizOption {
                id: "6b",
                label: "É uma ferramenta importante de marketing",
                value: "marketing",
            },
            QuizOption {
                id: "6c",
                label: "É o principal canal de vendas/contatos",
                value: "primary",
            },
            QuizOption {
                id: "6d",
                label: "É uma extensão da minha marca/identidade",
                value: "branding",
            },
            QuizOption {
                id: "6e",
                label: "É crucial para o crescimento do negócio",
                value: "growth",
            },
        ],
    },
];

/// Raised when the static catalog and the weight table disagree.
#[derive(Debug, thiserror::Error)]
pub enum CatalogIntegrityError {
    #[error("question {0} is out of sequence with its position")]
    QuestionOutOfSequence(u8),
    #[error("question {question} declares option id '{option}' more than once")]
    DuplicateOption { question: u8, option: &'static str },
    #[error("question {question} answer value '{value}' has no weight rule")]
    MissingWeightRule { question: u8, value: &'static str },
    #[error("question {question} answer value '{value}' has more than one weight rule")]
    DuplicateWeightRule { question: u8, value: &'static str },
    #[error("weight rule for question {question} value '{value}' matches no catalog option")]
    OrphanWeightRule { question: u8, value: &'static str },
    #[error("weight rule for question {question} value '{value}' awards no points")]
    EmptyWeightRule { question: u8, value: &'static str },
}

/// Cross-check the question catalog against the scoring weight table so
/// every selectable answer contributes to exactly one rule. Run once at
/// startup and asserted by tests; the scoring path assumes it holds.
pub fn ensure_catalog_integrity() -> Result<(), CatalogIntegrityError> {
    for (position, question) in QUIZ_QUESTIONS.iter().enumerate() {
        if usize::from(question.id) != position + 1 {
            return Err(CatalogIntegrityError::QuestionOutOfSequence(question.id));
        }

        for option in question.options {
            if question
                .options
                .iter()
                .filter(|candidate| candidate.id == option.id)
                .count()
                > 1
            {
                return Err(CatalogIntegrityError::DuplicateOption {
                    question: question.id,
                    option: option.id,
                });
            }

            let rules = WEIGHT_TABLE
                .iter()
                .filter(|rule| rule.question == question.id && rule.value == option.value)
                .count();
            match rules {
                0 => {
                    return Err(CatalogIntegrityError::MissingWeightRule {
                        question: question.id,
                        value: option.value,
                    })
                }
                1 => {}
                _ => {
                    return Err(CatalogIntegrityError::DuplicateWeightRule {
                        question: question.id,
                        value: option.value,
                    })
                }
            }
        }
    }

    for rule in WEIGHT_TABLE {
        let known = find_question(rule.question)
            .map(|question| {
                question
                    .options
                    .iter()
                    .any(|option| option.value == rule.value)
            })
            .unwrap_or(false);
        if !known {
            return Err(CatalogIntegrityError::OrphanWeightRule {
                question: rule.question,
                value: rule.value,
            });
        }
        if rule.awards.is_empty() {
            return Err(CatalogIntegrityError::EmptyWeightRule {
                question: rule.question,
                value: rule.value,
            });
        }
    }

    Ok(())
}

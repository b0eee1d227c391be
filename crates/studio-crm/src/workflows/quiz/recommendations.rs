use serde::Serialize;

use super::catalog::SiteCategory;

/// Immutable reference record describing the site package recommended for
/// one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub price: &'static str,
    pub timeframe: &'static str,
    pub recommendation: &'static str,
}

/// Total lookup: every category has exactly one recommendation, so this
/// can never fail at runtime.
pub fn recommendation_for(category: SiteCategory) -> &'static Recommendation {
    match category {
        SiteCategory::Landing => &LANDING,
        SiteCategory::Professional => &PROFESSIONAL,
        SiteCategory::Portfolio => &PORTFOLIO,
        SiteCategory::Business => &BUSINESS,
        SiteCategory::Ecommerce => &ECOMMERCE,
        SiteCategory::Startup => &STARTUP,
    }
}

static LANDING: Recommendation = Recommendation {
    title: "Página de Captação de Clientes",
    description: "Uma página única e eficiente, ideal para conseguir contatos de potenciais clientes para seu negócio.",
    features: &[
        "Design atraente que funciona em celulares",
        "Formulário para captar contatos",
        "Depoimentos de clientes satisfeitos",
        "Botão para WhatsApp",
        "Aparece nas buscas do Google",
    ],
    benefits: &[
        "Consegue mais contatos de clientes",
        "Carrega rapidamente mesmo em conexões lentas",
        "Comunica sua mensagem de forma direta",
        "Ideal para campanhas de divulgação",
        "Custo mais acessível",
    ],
    price: "R$ 1.500 - R$ 3.000",
    timeframe: "1 a 2 semanas",
    recommendation: "Perfeito para quem está começando ou quer testar uma ideia de negócio sem grande investimento inicial.",
};

static PROFESSIONAL: Recommendation = Recommendation {
    title: "Site Profissional Essencial",
    description: "Um site completo que passa credibilidade e gera mais contatos de clientes para profissionais e pequenos negócios.",
    features: &[
        "Design elegante e personalizado",
        "Apresentação clara dos seus serviços",
        "Página sobre você ou sua empresa",
        "Depoimentos de clientes",
        "Otimizado para buscas no Google",
    ],
    benefits: &[
        "Passa mais credibilidade para seus clientes",
        "Aparece melhor nas buscas do Google",
        "Atrai clientes mais qualificados",
        "Você se destaca da concorrência",
        "Funciona 24 horas por dia captando contatos",
    ],
    price: "R$ 3.500 - R$ 6.000",
    timeframe: "3 a 4 semanas",
    recommendation: "Ideal para profissionais autônomos e pequenas empresas que querem crescer com uma presença digital profissional.",
};

static PORTFOLIO: Recommendation = Recommendation {
    title: "Site Portfólio Visual",
    description: "Um site que destaca seus trabalhos de forma visual e impactante, ideal para profissionais criativos.",
    features: &[
        "Galeria de trabalhos com filtros",
        "Detalhes de cada projeto",
        "Design personalizado e criativo",
        "Conexão com suas redes sociais",
        "Formulário para contatos de novos projetos",
    ],
    benefits: &[
        "Mostra seus trabalhos de forma profissional",
        "Atrai novos clientes e projetos",
        "Se destaca visualmente da concorrência",
        "Fácil de adicionar novos projetos",
        "Demonstra sua qualidade e estilo",
    ],
    price: "R$ 3.000 - R$ 5.500",
    timeframe: "2 a 4 semanas",
    recommendation: "Perfeito para designers, fotógrafos, arquitetos e outros profissionais que precisam mostrar visualmente seu trabalho.",
};

static BUSINESS: Recommendation = Recommendation {
    title: "Site Institucional Completo",
    description: "Um site completo para empresas que querem se posicionar profissionalmente e destacar seus diferenciais.",
    features: &[
        "Várias páginas bem organizadas",
        "Apresentação da empresa e equipe",
        "Detalhes dos produtos e serviços",
        "Casos de sucesso e depoimentos",
        "Área para notícias e atualizações",
    ],
    benefits: &[
        "Fortalecer a imagem da sua empresa",
        "Aumentar a confiança dos clientes",
        "Melhorar o atendimento online",
        "Destacar diferenciais competitivos",
        "Gerar mais contatos qualificados",
    ],
    price: "R$ 5.000 - R$ 9.000",
    timeframe: "4 a 6 semanas",
    recommendation: "Recomendado para empresas que já estão estabelecidas e querem aumentar sua presença online e conseguir mais clientes.",
};

static ECOMMERCE: Recommendation = Recommendation {
    title: "Loja Virtual Completa",
    description: "Uma loja online para vender seus produtos pela internet de forma profissional e segura.",
    features: &[
        "Catálogo de produtos organizado",
        "Carrinho de compras otimizado",
        "Pagamento seguro integrado",
        "Cálculo automático de frete",
        "Painel para gerenciar pedidos e estoque",
    ],
    benefits: &[
        "Venda seus produtos 24 horas por dia",
        "Alcance clientes em qualquer lugar",
        "Automatize suas vendas",
        "Reduza custos operacionais",
        "Aumente seu faturamento",
    ],
    price: "R$ 8.000 - R$ 15.000",
    timeframe: "6 a 8 semanas",
    recommendation: "Ideal para negócios que querem vender produtos online e expandir seu alcance para além da loja física.",
};

static STARTUP: Recommendation = Recommendation {
    title: "Site para Startups e Novos Negócios",
    description: "Um site dinâmico e moderno para apresentar sua startup ou novo empreendimento de forma impactante.",
    features: &[
        "Design moderno e inovador",
        "Página de apresentação do produto/serviço",
        "Seção para captar leads e investidores",
        "Integração com ferramentas de marketing",
        "Otimizado para crescimento rápido",
    ],
    benefits: &[
        "Comunicar sua proposta de valor com clareza",
        "Atrair primeiros clientes e parceiros",
        "Estabelecer credibilidade no mercado",
        "Perfeito para apresentações para investidores",
        "Flexível para crescer com seu negócio",
    ],
    price: "R$ 4.000 - R$ 7.000",
    timeframe: "3 a 5 semanas",
    recommendation: "Perfeito para startups, novos negócios e empreendedores que precisam de uma presença digital que transmita inovação.",
};

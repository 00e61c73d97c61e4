use leptos::prelude::*;

use super::{avatar::IconRing, reveal::RevealOnce};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section
            id="about"
            class="flex flex-col md:flex-row min-h-screen w-full bg-gray-500 px-4 sm:px-6 pt-0 pb-8"
        >
            <div class="md:w-2/3 max-w-4xl flex flex-col items-center justify-center mt-2 px-4 md:px-0">
                <RevealOnce>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 mt-4 md:mt-[20px] text-center text-black">
                        "About Me"
                    </h2>
                </RevealOnce>
                <div class="text-base md:text-lg leading-relaxed max-w-full md:max-w-3xl text-white text-center space-y-4">
                    <p>
                        "Hello! I’m Pahuldeep Singh, a passionate software developer and master’s degree student at Georgia Institute of Technology, specializing in Machine Learning, Deep Learning, Advanced Algorithms, and Cloud Computing."
                    </p>
                    <p>
                        "I have extensive experience as a Senior Full-Stack Developer at Calian Advanced Technologies, where I engineer scalable APIs and microservices, deploy AI/ML solutions, and work with technologies such as Angular, Node.js, Ruby on Rails, AWS, Docker, Kubernetes, Terraform, and more."
                    </p>
                    <p>
                        "Prior to this, I worked at Valley Fiber as a Full-Stack Developer focusing on React, Node.js, Python, ETL pipelines, and database optimization. I am skilled in building robust, maintainable software, with strong expertise in cloud infrastructure, testing, security best practices, and Agile methodologies."
                    </p>
                    <p>
                        "In addition to software development, I actively conduct research in artificial intelligence at Georgia Tech, focusing on advancing machine learning algorithms and their practical applications in real-world problems."
                    </p>
                    <p>
                        "I am continuously learning and applying new technologies, with certifications including AWS Solutions Architect Associate and CCNA, and a strong foundation in Agile/Scrum methodologies."
                    </p>
                </div>
            </div>
            <IconRing />
        </section>
    }
}
